//! Editor configuration model.
//!
//! The configuration is a small JSON document. Every field is optional in
//! the file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{self, Color};
use crate::constants;
use crate::error::{PixeditError, Result};

/// Root configuration for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of a new canvas in pixels.
    pub width: usize,
    /// Height of a new canvas in pixels.
    pub height: usize,
    /// Initial primary color.
    pub primary: Color,
    /// Initial secondary color.
    pub secondary: Color,
    /// Swatches shown in the palette, in row-major order.
    pub palette: Vec<Color>,
    /// Initial step of the color adjuster strips.
    pub adjust_step: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_WIDTH,
            height: constants::DEFAULT_HEIGHT,
            primary: color::GRAY,
            secondary: color::WHITE,
            palette: vec![
                color::BLACK,
                color::GRAY,
                color::WHITE,
                color::RED,
                color::YELLOW,
                color::GREEN,
                color::CYAN,
                color::BLUE,
                color::MAGENTA,
            ],
            adjust_step: constants::DEFAULT_ADJUST_STEP,
        }
    }
}

impl EditorConfig {
    /// Loads the configuration from `path`, returning the defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        tracing::info!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path).map_err(|source| PixeditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the canvas size and adjuster step are usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PixeditError::Config {
                message: format!(
                    "canvas size must be positive, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if !(constants::MIN_ADJUST_STEP..=constants::MAX_ADJUST_STEP).contains(&self.adjust_step)
        {
            return Err(PixeditError::Config {
                message: format!("adjust_step out of range: {}", self.adjust_step),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = EditorConfig::load(&dir.path().join("absent.json")).expect("load");
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r##"{ "width": 8, "primary": "#ff0000" }"##).expect("write");
        let config = EditorConfig::load(&path).expect("load");
        assert_eq!(config.width, 8);
        assert_eq!(config.height, constants::DEFAULT_HEIGHT);
        assert_eq!(config.primary, color::RED);
        assert_eq!(config.palette.len(), 9);
    }

    #[test]
    fn bad_color_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "secondary": "nope" }"#).expect("write");
        assert!(EditorConfig::load(&path).is_err());
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = EditorConfig {
            height: 0,
            ..EditorConfig::default()
        };
        assert!(matches!(config.validate(), Err(PixeditError::Config { .. })));
    }
}

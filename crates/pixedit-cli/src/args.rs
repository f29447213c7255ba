//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// PixEdiTer, a pixel art editor for the terminal.
#[derive(Parser, Debug)]
#[command(name = "pixedit", version, about, long_about = None)]
pub struct Cli {
    /// PNG image to edit. Created on first save if it does not exist.
    pub file: Option<PathBuf>,

    /// Size of a new canvas, e.g. `32x16`.
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<CanvasSize>,

    /// Path to the configuration file.
    #[arg(long, env = "PIXEDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the log. The terminal itself is owned by the editor.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Canvas dimensions given as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl FromStr for CanvasSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |part: &str| -> Result<usize, String> {
            match part.trim().parse::<usize>() {
                Ok(0) => Err(format!("size must be positive, got '{s}'")),
                Ok(n) => Ok(n),
                Err(e) => Err(format!("invalid size '{s}': {e}")),
            }
        };
        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_size() {
        assert_eq!(
            "32x16".parse::<CanvasSize>(),
            Ok(CanvasSize {
                width: 32,
                height: 16
            })
        );
        assert_eq!("8X8".parse::<CanvasSize>().map(|s| s.to_string()), Ok("8x8".into()));
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!("32".parse::<CanvasSize>().is_err());
        assert!("0x4".parse::<CanvasSize>().is_err());
        assert!("ax4".parse::<CanvasSize>().is_err());
    }

    #[test]
    fn parses_command_line() {
        let cli = Cli::try_parse_from(["pixedit", "--size", "4x3", "art.png"]).expect("parse");
        assert_eq!(cli.file, Some(PathBuf::from("art.png")));
        assert_eq!(
            cli.size,
            Some(CanvasSize {
                width: 4,
                height: 3
            })
        );
        assert!(Cli::try_parse_from(["pixedit", "--size", "big"]).is_err());
    }
}

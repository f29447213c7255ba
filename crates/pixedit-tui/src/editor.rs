//! The document and selections shared by all widgets.

use std::path::Path;

use pixedit_canvas::{DualColor, PixelGrid, codec};
use pixedit_common::config::EditorConfig;
use pixedit_common::error::Result;
use pixedit_tools::ToolSet;

/// Everything a widget may read or change while handling input.
#[derive(Debug)]
pub struct Editor {
    /// The image being edited.
    pub grid: PixelGrid,
    /// Primary and secondary colors.
    pub colors: DualColor,
    /// The tools and which one is selected.
    pub tools: ToolSet,
}

impl Editor {
    /// Creates an editor for `grid` with the configured colors.
    #[must_use]
    pub fn new(grid: PixelGrid, config: &EditorConfig) -> Self {
        Self {
            grid,
            colors: DualColor::new(config.primary, config.secondary),
            tools: ToolSet::new(),
        }
    }

    /// Replaces the image, dropping any gesture in progress.
    pub fn replace_grid(&mut self, grid: PixelGrid) {
        self.tools.reset_current();
        self.grid = grid;
    }

    /// Opens a PNG file as the new image.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let grid = codec::load(path)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Saves the image to `path`, or to where it was last opened or saved.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is known or the file cannot be written.
    pub fn save(&mut self, path: Option<&Path>) -> Result<std::path::PathBuf> {
        codec::save(&mut self.grid, path)
    }

    /// Crops the image to the half-open region `[x0, x1) × [y0, y1)`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the region is empty.
    pub fn crop(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) -> Result<()> {
        self.tools.reset_current();
        self.grid.crop(x0, y0, x1, y1)
    }
}

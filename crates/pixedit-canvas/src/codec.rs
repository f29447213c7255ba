//! Loading and saving pixel grids as image files.
//!
//! Images are read through the `image` crate and flattened to 8-bit RGB;
//! any alpha channel is dropped.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use pixedit_common::color::Color;
use pixedit_common::error::{PixeditError, Result};
use pixedit_common::types::Pos;

use crate::grid::PixelGrid;

fn image_err(path: &Path, err: impl std::fmt::Display) -> PixeditError {
    PixeditError::Image {
        message: format!("{}: {err}", path.display()),
    }
}

/// Reads an image file into a new grid that remembers its path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load(path: &Path) -> Result<PixelGrid> {
    tracing::info!(path = %path.display(), "loading image");
    let image = image::open(path).map_err(|e| image_err(path, e))?.to_rgb8();
    let (width, height) = image.dimensions();
    let mut grid = PixelGrid::new(width as usize, height as usize);
    for (x, y, pixel) in image.enumerate_pixels() {
        let Rgb([r, g, b]) = *pixel;
        grid.set(Pos::new(x as usize, y as usize), Color::new(r, g, b));
    }
    grid.set_path(path);
    Ok(grid)
}

/// Writes `grid` to `path`, or to the grid's own path when `path` is `None`.
/// On success the grid remembers the path it was written to.
///
/// # Errors
///
/// Returns an error if no path is known, the format implied by the file
/// extension is unsupported, or the file cannot be written.
pub fn save(grid: &mut PixelGrid, path: Option<&Path>) -> Result<PathBuf> {
    let target = path
        .or_else(|| grid.path())
        .map(Path::to_path_buf)
        .ok_or_else(|| PixeditError::command("Unable to save: file path not given"))?;

    let width = u32::try_from(grid.width()).map_err(|e| image_err(&target, e))?;
    let height = u32::try_from(grid.height()).map_err(|e| image_err(&target, e))?;
    let mut image = RgbImage::new(width, height);
    for (pos, color) in grid.iter() {
        let (r, g, b) = color.rgb();
        #[allow(clippy::cast_possible_truncation)]
        image.put_pixel(pos.x as u32, pos.y as u32, Rgb([r, g, b]));
    }
    image.save(&target).map_err(|e| image_err(&target, e))?;
    tracing::info!(path = %target.display(), "saved image");
    grid.set_path(&target);
    Ok(target)
}

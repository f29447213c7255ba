//! The pixel grid edited by the tools.

use std::path::{Path, PathBuf};

use pixedit_common::color::{self, Color};
use pixedit_common::error::{PixeditError, Result};
use pixedit_common::types::Pos;

/// A width×height matrix of colors stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    path: Option<PathBuf>,
}

impl PixelGrid {
    /// Creates a white grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, color::WHITE)
    }

    /// Creates a grid filled with one color.
    #[must_use]
    pub fn filled(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
            path: None,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `pos` addresses a cell of this grid.
    #[must_use]
    pub const fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Clamps signed coordinates onto the nearest cell of the grid.
    ///
    /// Returns `None` only for an empty grid.
    #[must_use]
    pub fn clamp(&self, x: i64, y: i64) -> Option<Pos> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let clamp_axis = |value: i64, len: usize| {
            usize::try_from(value.max(0)).map_or(len - 1, |v| v.min(len - 1))
        };
        Some(Pos::new(
            clamp_axis(x, self.width),
            clamp_axis(y, self.height),
        ))
    }

    const fn index(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }

    /// Returns the color at `pos`. Cells outside the grid read as white,
    /// the same fill [`PixelGrid::crop`] uses when growing.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Color {
        self.try_get(pos).unwrap_or(color::WHITE)
    }

    /// Returns the color at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn try_get(&self, pos: Pos) -> Option<Color> {
        self.contains(pos).then(|| self.pixels[self.index(pos)])
    }

    /// Writes the color at `pos`. Writes outside the grid are dropped.
    pub fn set(&mut self, pos: Pos, color: Color) {
        if !self.contains(pos) {
            tracing::debug!(
                %pos,
                width = self.width,
                height = self.height,
                "write outside the grid dropped"
            );
            return;
        }
        let index = self.index(pos);
        self.pixels[index] = color;
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Color)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .map(|(i, color)| (Pos::new(i % self.width, i / self.width), *color))
    }

    /// Replaces the grid with the half-open region `[x0, x1) × [y0, y1)`.
    ///
    /// Reversed corners are swapped. Cells of the region that fall outside the
    /// current grid become white, so cropping can also enlarge the canvas.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the region is empty.
    pub fn crop(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) -> Result<()> {
        let (x0, x1) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y1 < y0 { (y1, y0) } else { (y0, y1) };
        let width = usize::try_from(x1 - x0).unwrap_or(0);
        let height = usize::try_from(y1 - y0).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(PixeditError::validation(format!(
                "crop region ({x0}, {y0})..({x1}, {y1}) is empty"
            )));
        }

        let mut pixels = Vec::with_capacity(width * height);
        for y in y0..y1 {
            for x in x0..x1 {
                let source = usize::try_from(x)
                    .ok()
                    .zip(usize::try_from(y).ok())
                    .and_then(|(x, y)| self.try_get(Pos::new(x, y)));
                pixels.push(source.unwrap_or(color::WHITE));
            }
        }
        tracing::info!(
            from_width = self.width,
            from_height = self.height,
            width,
            height,
            "cropped canvas"
        );
        self.width = width;
        self.height = height;
        self.pixels = pixels;
        Ok(())
    }

    /// The file this grid was loaded from or last saved to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Records the file this grid belongs to.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_white() {
        let grid = PixelGrid::new(3, 2);
        assert_eq!(grid.iter().count(), 6);
        assert!(grid.iter().all(|(_, c)| c == color::WHITE));
    }

    #[test]
    fn set_then_get() {
        let mut grid = PixelGrid::new(4, 4);
        grid.set(Pos::new(3, 1), color::RED);
        assert_eq!(grid.get(Pos::new(3, 1)), color::RED);
        assert_eq!(grid.try_get(Pos::new(4, 1)), None);
    }

    #[test]
    fn out_of_range_access_does_not_panic() {
        let mut grid = PixelGrid::filled(2, 2, color::BLACK);
        grid.set(Pos::new(2, 0), color::RED);
        grid.set(Pos::new(0, 7), color::RED);
        assert!(grid.iter().all(|(_, c)| c == color::BLACK));
        assert_eq!(grid.get(Pos::new(5, 5)), color::WHITE);
        assert_eq!(grid.try_get(Pos::new(1, 2)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = PixelGrid::new(2, 2);
        let positions: Vec<Pos> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }

    #[test]
    fn clamp_snaps_to_edges() {
        let grid = PixelGrid::new(5, 3);
        assert_eq!(grid.clamp(-4, 1), Some(Pos::new(0, 1)));
        assert_eq!(grid.clamp(9, 9), Some(Pos::new(4, 2)));
        assert_eq!(PixelGrid::new(0, 3).clamp(0, 0), None);
    }

    #[test]
    fn crop_shrinks_and_keeps_content() {
        let mut grid = PixelGrid::new(4, 4);
        grid.set(Pos::new(2, 2), color::BLUE);
        grid.crop(1, 1, 3, 3).expect("crop");
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.get(Pos::new(1, 1)), color::BLUE);
    }

    #[test]
    fn crop_swaps_reversed_corners_and_pads_white() {
        let mut grid = PixelGrid::filled(2, 2, color::BLACK);
        grid.crop(3, 3, 0, 0).expect("crop");
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.get(Pos::new(1, 1)), color::BLACK);
        assert_eq!(grid.get(Pos::new(2, 2)), color::WHITE);
    }

    #[test]
    fn crop_rejects_empty_region() {
        let mut grid = PixelGrid::new(4, 4);
        assert!(matches!(
            grid.crop(1, 1, 1, 3),
            Err(PixeditError::Validation { .. })
        ));
        assert_eq!(grid.width(), 4);
    }
}

//! Domain primitive types used across the pixedit workspace.

use std::fmt;

/// A grid-local pixel coordinate.
///
/// Columns grow to the right and rows grow downward, both starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Pos {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//! # pixedit-canvas
//!
//! The data the editing tools work on.
//!
//! Handles:
//! - **Grid**: the width×height color matrix with bounds helpers and cropping.
//! - **Selection**: the primary/secondary color pair with change listeners.
//! - **Codec**: loading and saving grids as PNG files.

pub mod codec;
pub mod grid;
pub mod selection;

pub use grid::PixelGrid;
pub use selection::{DualColor, Which};

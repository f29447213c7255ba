//! # pixedit-tools
//!
//! The interactive tool engine of the pixel editor.
//!
//! A tool receives grid-local press/drag/release events and answers with
//! ephemeral draws (screen-only previews) and, eventually, a commit into the
//! [`PixelGrid`](pixedit_canvas::PixelGrid). Tools:
//! - **Pencil**: paints single pixels immediately.
//! - **Rectangle** / **Line**: anchored outlines previewed by diffing.
//! - **Fill**: iterative 4-connected flood fill.
//! - **Gradient**: linear or radial, interpolated in RGB or HSL.
//!
//! [`ToolSet`] owns one instance of each and routes events to the current one.

pub mod event;
pub mod fill;
pub mod gradient;
pub mod line;
pub mod pencil;
pub mod rectangle;
pub mod shape;
pub mod tool;
pub mod toolset;

pub use event::DrawEvent;
pub use tool::{DrawFn, Tool};
pub use toolset::{ToolKind, ToolSet};

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use pixedit_canvas::{DualColor, PixelGrid};
    use pixedit_common::color::{self, Color};
    use pixedit_common::types::Pos;
    use pixedit_input::{MouseButton, MouseKind};

    use crate::event::DrawEvent;

    /// What the terminal would show: the grid plus ephemeral draws.
    pub struct Screen {
        pub cells: HashMap<Pos, Color>,
        pub draws: usize,
    }

    impl Screen {
        pub fn of(grid: &PixelGrid) -> Self {
            Self {
                cells: grid.iter().collect(),
                draws: 0,
            }
        }

        pub fn draw(&mut self, pos: Pos, color: Color) {
            self.draws += 1;
            let _ = self.cells.insert(pos, color);
        }
    }

    pub fn colors() -> DualColor {
        DualColor::new(color::RED, color::BLUE)
    }

    pub fn event(
        colors: &DualColor,
        kind: MouseKind,
        button: MouseButton,
        x: usize,
        y: usize,
    ) -> DrawEvent<'_> {
        DrawEvent::new(Pos::new(x, y), kind, button, colors)
    }
}

//! Anchored shape tools with a diffed preview.
//!
//! A press fixes the anchor. Every drag traces the shape from the anchor to
//! the pointer, draws it, and restores the grid color of the cells that
//! belonged to the previous trace but not to the new one. Release commits
//! the final trace. Pressing again mid-gesture cancels it.

use std::collections::HashSet;
use std::marker::PhantomData;

use pixedit_canvas::PixelGrid;
use pixedit_common::color::Color;
use pixedit_common::error::Result;
use pixedit_common::types::Pos;

use crate::event::DrawEvent;
use crate::tool::{DrawFn, Tool};

/// Gesture state of an anchored tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A button is held; the preview spans `anchor` to `previous`.
    Tracking {
        /// Where the press happened.
        anchor: Pos,
        /// Pointer position of the last drawn preview.
        previous: Pos,
    },
}

/// A rasterizable shape between two corner or end points.
pub trait Shape {
    /// Display name of the tool drawing this shape.
    const NAME: &'static str;

    /// Returns every cell of the shape spanning `from` and `to`.
    fn trace(from: Pos, to: Pos) -> Vec<Pos>;
}

/// A tool drawing shape `S` with anchor/preview/commit gestures.
pub struct ShapeTool<S> {
    gesture: Gesture,
    shape: PhantomData<S>,
}

impl<S: Shape> ShapeTool<S> {
    /// Creates an idle tool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
            shape: PhantomData,
        }
    }

    /// Current gesture state.
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Draws the trace `anchor → to` and restores cells of `anchor → stale`
    /// that it no longer covers. Returns the new trace.
    fn redraw(
        grid: &PixelGrid,
        anchor: Pos,
        stale: Pos,
        to: Pos,
        color: Color,
        draw: &mut DrawFn<'_>,
    ) -> Vec<Pos> {
        let current = S::trace(anchor, to);
        let covered: HashSet<Pos> = current.iter().copied().collect();
        for &pos in &current {
            draw(pos, color);
        }
        for pos in S::trace(anchor, stale) {
            if !covered.contains(&pos) {
                draw(pos, grid.get(pos));
            }
        }
        current
    }
}

impl<S: Shape> Default for ShapeTool<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for ShapeTool<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeTool")
            .field("gesture", &self.gesture)
            .finish()
    }
}

impl<S: Shape> Tool for ShapeTool<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn on_press(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        if let Gesture::Tracking { anchor, previous } = self.gesture {
            tracing::debug!(tool = S::NAME, "gesture cancelled by second press");
            for pos in S::trace(anchor, previous) {
                draw(pos, grid.get(pos));
            }
            self.reset();
            return Ok(true);
        }
        if !ev.is_paint_button() {
            return Ok(false);
        }
        self.gesture = Gesture::Tracking {
            anchor: ev.pos,
            previous: ev.pos,
        };
        draw(ev.pos, ev.active_color());
        Ok(true)
    }

    fn on_drag(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        let Gesture::Tracking { anchor, previous } = self.gesture else {
            return Ok(false);
        };
        let _ = Self::redraw(grid, anchor, previous, ev.pos, ev.active_color(), draw);
        self.gesture = Gesture::Tracking {
            anchor,
            previous: ev.pos,
        };
        Ok(true)
    }

    fn on_release(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        let Gesture::Tracking { anchor, previous } = self.gesture else {
            return Ok(false);
        };
        let color = ev.active_color();
        let cells = Self::redraw(grid, anchor, previous, ev.pos, color, draw);
        for pos in &cells {
            grid.set(*pos, color);
        }
        tracing::debug!(tool = S::NAME, %anchor, end = %ev.pos, cells = cells.len(), "committed shape");
        self.reset();
        Ok(true)
    }

    fn reset(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }
}

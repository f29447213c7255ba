//! The contract every drawing tool implements.

use pixedit_canvas::PixelGrid;
use pixedit_common::color::Color;
use pixedit_common::error::Result;
use pixedit_common::types::Pos;

use crate::event::DrawEvent;

/// Ephemeral draw callback: paints one pixel on screen without touching the
/// grid.
pub type DrawFn<'a> = dyn FnMut(Pos, Color) + 'a;

/// A drawing tool driven by press → drag* → release gestures.
///
/// Each handler returns `Ok(true)` when it consumed the event. Tools with a
/// preview keep their gesture state between press and release and must be
/// idle again after release or [`Tool::reset`]. An error aborts the gesture;
/// the caller resets the tool.
pub trait Tool {
    /// Display name shown in the toolbox.
    fn name(&self) -> &'static str;

    /// Starts a gesture.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot compute its preview.
    fn on_press(&mut self, grid: &mut PixelGrid, ev: &DrawEvent<'_>, draw: &mut DrawFn<'_>)
    -> Result<bool>;

    /// Follows the pointer while a button is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot compute its preview.
    fn on_drag(&mut self, grid: &mut PixelGrid, ev: &DrawEvent<'_>, draw: &mut DrawFn<'_>)
    -> Result<bool>;

    /// Ends a gesture, committing the preview into the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot compute its final shape.
    fn on_release(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool>;

    /// Drops any gesture in progress without committing it.
    fn reset(&mut self);

    /// True when no gesture is in progress.
    fn is_idle(&self) -> bool;
}

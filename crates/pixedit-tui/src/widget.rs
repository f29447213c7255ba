//! The widget contract and the placement state every widget shares.

use pixedit_common::color;
use pixedit_common::error::Result;
use pixedit_input::MouseEvent;
use ratatui::layout::{Position, Rect};

use crate::editor::Editor;
use crate::painter::{self, Painter};

/// Direction of a move or resize step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// The step as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Where a widget sits on screen and how it is decorated.
///
/// `area` covers the widget's content in 1-based terminal coordinates; the
/// border is drawn one cell outside it and is not part of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Content area.
    pub area: Rect,
    /// Selected widgets get a red border and follow arrow keys.
    pub selected: bool,
    /// Label drawn on the top border.
    pub title: Option<String>,
}

impl Frame {
    /// Creates an unselected, untitled frame.
    #[must_use]
    pub const fn new(area: Rect) -> Self {
        Self {
            area,
            selected: false,
            title: None,
        }
    }

    /// True if the terminal cell `(x, y)` is inside the content area.
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains(Position::new(x, y))
    }

    /// Shifts the area, keeping its border on screen.
    pub fn move_by(&mut self, dx: i16, dy: i16) {
        self.area.x = self.area.x.saturating_add_signed(dx).max(2);
        self.area.y = self.area.y.saturating_add_signed(dy).max(2);
    }

    /// Draws the border and title.
    pub fn render(&self, painter: &mut Painter) {
        let border = if self.selected { color::RED } else { painter::LABEL };
        painter.frame(self.area, &painter::SHARP, border);
        if let Some(title) = &self.title {
            painter.text(self.area.x, self.area.y.saturating_sub(1), title, painter::LABEL);
        }
    }
}

/// A rectangular, movable part of the editor screen.
pub trait Widget {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Placement state.
    fn frame(&self) -> &Frame;

    /// Mutable placement state.
    fn frame_mut(&mut self) -> &mut Frame;

    /// True if the terminal cell `(x, y)` belongs to this widget.
    fn contains(&self, x: u16, y: u16) -> bool {
        self.frame().contains(x, y)
    }

    /// Handles a mouse event at terminal coordinates. Returns `true` when
    /// no other widget should see it.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit triggered by the event fails.
    fn on_mouse(
        &mut self,
        ev: &MouseEvent,
        editor: &mut Editor,
        painter: &mut Painter,
    ) -> Result<bool>;

    /// Draws the whole widget, border included.
    fn render(&self, editor: &Editor, painter: &mut Painter);

    /// Moves the widget one step.
    fn move_by(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.frame_mut().move_by(dx, dy);
    }

    /// Grows or shrinks the widget one step: `Up` and `Left` shrink, `Down`
    /// and `Right` grow.
    ///
    /// # Errors
    ///
    /// Returns an error if resizing changes the document and that fails.
    fn resize(&mut self, direction: Direction, editor: &mut Editor) -> Result<()>;

    /// Flips the selection state.
    fn toggle_selected(&mut self) {
        let frame = self.frame_mut();
        frame.selected = !frame.selected;
    }
}

//! Tool selection and event routing.

use std::fmt;

use pixedit_canvas::PixelGrid;
use pixedit_common::error::Result;
use pixedit_input::MouseKind;

use crate::event::DrawEvent;
use crate::fill::Fill;
use crate::gradient::Gradient;
use crate::line::LineTool;
use crate::pencil::Pencil;
use crate::rectangle::RectangleTool;
use crate::tool::{DrawFn, Tool};

/// The available tools, in toolbox order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    /// Freehand single pixels.
    #[default]
    Pencil,
    /// Rectangle outlines.
    Rectangle,
    /// Straight lines.
    Line,
    /// Flood fill.
    Fill,
    /// Linear or radial gradients.
    Gradient,
}

impl ToolKind {
    /// Every tool, in toolbox order.
    pub const ALL: [Self; 5] = [
        Self::Pencil,
        Self::Rectangle,
        Self::Line,
        Self::Fill,
        Self::Gradient,
    ];

    /// Position in [`ToolKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tool at `index` in [`ToolKind::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Rectangle => "Rectangle",
            Self::Line => "Line",
            Self::Fill => "Fill",
            Self::Gradient => "Gradient",
        }
    }

    /// Looks a tool up by name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owns one instance of every tool and routes events to the current one.
#[derive(Debug, Default)]
pub struct ToolSet {
    current: ToolKind,
    pencil: Pencil,
    rectangle: RectangleTool,
    line: LineTool,
    fill: Fill,
    gradient: Gradient,
}

impl ToolSet {
    /// Creates a tool set with the pencil selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected tool.
    #[must_use]
    pub const fn current(&self) -> ToolKind {
        self.current
    }

    /// Selects `kind`, dropping any gesture of the previously selected tool.
    pub fn select(&mut self, kind: ToolKind) {
        if kind == self.current {
            return;
        }
        self.current_tool_mut().reset();
        tracing::info!(from = %self.current, to = %kind, "tool selected");
        self.current = kind;
    }

    /// Selects the tool at `index`; out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if let Some(kind) = ToolKind::from_index(index) {
            self.select(kind);
        }
    }

    /// The tool instance for `kind`.
    #[must_use]
    pub fn tool(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::Pencil => &self.pencil,
            ToolKind::Rectangle => &self.rectangle,
            ToolKind::Line => &self.line,
            ToolKind::Fill => &self.fill,
            ToolKind::Gradient => &self.gradient,
        }
    }

    /// Mutable access to the tool instance for `kind`.
    pub fn tool_mut(&mut self, kind: ToolKind) -> &mut dyn Tool {
        match kind {
            ToolKind::Pencil => &mut self.pencil,
            ToolKind::Rectangle => &mut self.rectangle,
            ToolKind::Line => &mut self.line,
            ToolKind::Fill => &mut self.fill,
            ToolKind::Gradient => &mut self.gradient,
        }
    }

    /// Mutable access to the selected tool.
    pub fn current_tool_mut(&mut self) -> &mut dyn Tool {
        self.tool_mut(self.current)
    }

    /// Aborts the gesture of the selected tool, if any.
    pub fn reset_current(&mut self) {
        self.current_tool_mut().reset();
    }

    /// Routes `ev` to the selected tool: press, drag or release by kind.
    ///
    /// Events outside the grid are not consumed.
    ///
    /// # Errors
    ///
    /// Returns the tool's error after resetting it.
    pub fn dispatch(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        if !grid.contains(ev.pos) {
            tracing::debug!(pos = %ev.pos, kind = ?ev.kind, "event outside the grid, ignored");
            return Ok(false);
        }
        let kind = self.current;
        let tool = self.tool_mut(kind);
        let result = match ev.kind {
            MouseKind::Down => tool.on_press(grid, ev, draw),
            MouseKind::Drag => tool.on_drag(grid, ev, draw),
            MouseKind::Up => tool.on_release(grid, ev, draw),
        };
        if let Err(err) = &result {
            tracing::warn!(tool = %kind, pos = %ev.pos, error = %err, "tool failed, gesture aborted");
            tool.reset();
        }
        result
    }
}

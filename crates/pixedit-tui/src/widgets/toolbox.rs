//! Tool picker.

use pixedit_common::error::Result;
use pixedit_input::{MouseEvent, MouseKind};
use pixedit_tools::ToolKind;
use ratatui::layout::Rect;

use crate::editor::Editor;
use crate::painter::{self, Painter};
use crate::widget::{Direction, Frame, Widget};

/// Lists the tools, one per row; a left click selects one.
#[derive(Debug)]
pub struct Toolbox {
    frame: Frame,
}

impl Toolbox {
    /// Places the toolbox at column `left`, row `top`, `width` columns wide.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(left: u16, top: u16, width: u16) -> Self {
        Self {
            frame: Frame::new(Rect::new(left, top, width, ToolKind::ALL.len() as u16)),
        }
    }
}

impl Widget for Toolbox {
    fn name(&self) -> &'static str {
        "toolbox"
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn on_mouse(
        &mut self,
        ev: &MouseEvent,
        editor: &mut Editor,
        painter: &mut Painter,
    ) -> Result<bool> {
        if ev.kind != MouseKind::Down || !ev.button.is_left() {
            return Ok(false);
        }
        let row = ev.y.saturating_sub(self.frame.area.y);
        editor.tools.select_index(usize::from(row));
        self.render(editor, painter);
        Ok(true)
    }

    fn render(&self, editor: &Editor, painter: &mut Painter) {
        self.frame.render(painter);
        let area = self.frame.area;
        for (row, kind) in (area.y..).zip(ToolKind::ALL) {
            let color = if kind == editor.tools.current() {
                painter::LABEL
            } else {
                painter::DIM
            };
            painter.line(area.x, row, kind.name(), usize::from(area.width), color);
        }
    }

    fn resize(&mut self, direction: Direction, _editor: &mut Editor) -> Result<()> {
        let area = &mut self.frame.area;
        match direction {
            Direction::Left if area.width > 2 => area.width -= 1,
            Direction::Right => area.width = area.width.saturating_add(1),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pixedit_canvas::PixelGrid;
    use pixedit_common::config::EditorConfig;
    use pixedit_input::MouseButton;

    use super::*;

    #[test]
    fn left_click_selects_row() {
        let mut editor = Editor::new(PixelGrid::new(2, 2), &EditorConfig::default());
        let mut toolbox = Toolbox::new(20, 3, 10);
        let mut painter = Painter::new();

        let click = MouseEvent::new(MouseKind::Down, MouseButton::LEFT, 22, 6);
        assert!(toolbox.on_mouse(&click, &mut editor, &mut painter).expect("click"));
        assert_eq!(editor.tools.current(), ToolKind::Fill);

        let right = MouseEvent::new(MouseKind::Down, MouseButton::RIGHT, 22, 3);
        assert!(!toolbox.on_mouse(&right, &mut editor, &mut painter).expect("click"));
        assert_eq!(editor.tools.current(), ToolKind::Fill);
    }

    #[test]
    fn only_width_is_resizable() {
        let mut editor = Editor::new(PixelGrid::new(2, 2), &EditorConfig::default());
        let mut toolbox = Toolbox::new(20, 3, 3);
        for _ in 0..3 {
            toolbox.resize(Direction::Left, &mut editor).expect("resize");
        }
        toolbox.resize(Direction::Down, &mut editor).expect("resize");
        assert_eq!(toolbox.frame().area, Rect::new(20, 3, 2, 5));
    }
}

//! The canvas widget.

use pixedit_canvas::{PixelGrid, Which};
use pixedit_common::color::Color;
use pixedit_common::error::Result;
use pixedit_common::types::Pos;
use pixedit_input::{MouseEvent, MouseKind};
use pixedit_tools::DrawEvent;
use ratatui::layout::Rect;

use crate::editor::Editor;
use crate::painter::Painter;
use crate::widget::{Direction, Frame, Widget};

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Shows the image, two terminal columns per pixel, and feeds mouse input
/// to the current tool.
#[derive(Debug)]
pub struct DrawArea {
    frame: Frame,
    /// Set between a press inside the canvas and the matching release.
    capturing: bool,
}

impl DrawArea {
    /// Places the canvas with its top-left pixel at column `left`, row `top`.
    #[must_use]
    pub fn new(left: u16, top: u16, grid: &PixelGrid) -> Self {
        let mut area = Self {
            frame: Frame::new(Rect::new(left, top, 0, 0)),
            capturing: false,
        };
        area.fit(grid);
        area
    }

    /// Resizes the widget to the image dimensions.
    pub fn fit(&mut self, grid: &PixelGrid) {
        self.frame.area.width = to_u16(grid.width().saturating_mul(2));
        self.frame.area.height = to_u16(grid.height());
    }

    /// True while a press that started on the canvas is held.
    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Converts a terminal cell to the pixel under it.
    #[must_use]
    pub fn to_grid(&self, x: u16, y: u16, grid: &PixelGrid) -> Option<Pos> {
        if !self.frame.contains(x, y) {
            return None;
        }
        let area = self.frame.area;
        let pos = Pos::new(usize::from(x - area.x) / 2, usize::from(y - area.y));
        grid.contains(pos).then_some(pos)
    }

    /// Converts a terminal cell to the nearest pixel, clamping positions
    /// outside the canvas onto its edge.
    #[must_use]
    pub fn to_grid_clamped(&self, x: u16, y: u16, grid: &PixelGrid) -> Option<Pos> {
        let area = self.frame.area;
        let gx = (i64::from(x) - i64::from(area.x)).div_euclid(2);
        let gy = i64::from(y) - i64::from(area.y);
        grid.clamp(gx, gy)
    }

    /// Terminal cell of the left half of pixel `pos`.
    #[must_use]
    pub fn to_screen(&self, pos: Pos) -> (u16, u16) {
        let area = self.frame.area;
        (
            area.x.saturating_add(to_u16(pos.x.saturating_mul(2))),
            area.y.saturating_add(to_u16(pos.y)),
        )
    }

    fn crop_to(editor: &mut Editor, width: usize, height: usize) -> Result<()> {
        editor.crop(0, 0, to_i64(width), to_i64(height))
    }
}

impl Widget for DrawArea {
    fn name(&self) -> &'static str {
        "draw area"
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
        let pos = if self.frame.contains(ev.x, ev.y) {
            self.to_grid(ev.x, ev.y, &editor.grid)
        } else if self.capturing && ev.kind != MouseKind::Down {
            self.to_grid_clamped(ev.x, ev.y, &editor.grid)
        } else {
            None
        };
        let Some(pos) = pos else {
            return Ok(false);
        };

        let current = editor.tools.current();
        if ev.button.is_middle()
            && ev.kind != MouseKind::Up
            && editor.tools.tool(current).is_idle()
        {
            if let Some(picked) = editor.grid.try_get(pos) {
                editor.colors.set(Which::Primary, picked);
            }
            return Ok(true);
        }

        match ev.kind {
            MouseKind::Down => self.capturing = true,
            MouseKind::Up => self.capturing = false,
            MouseKind::Drag => {}
        }

        let Editor {
            grid,
            colors,
            tools,
        } = editor;
        let draw_event = DrawEvent::new(pos, ev.kind, ev.button, colors);
        let mut draw = |p: Pos, c: Color| {
            let (x, y) = self.to_screen(p);
            painter.pixel(x, y, c);
        };
        let consumed = tools.dispatch(grid, &draw_event, &mut draw);
        if consumed.is_err() {
            self.capturing = false;
        }
        consumed
    }

    fn render(&self, editor: &Editor, painter: &mut Painter) {
        self.frame.render(painter);
        for (pos, c) in editor.grid.iter() {
            let (x, y) = self.to_screen(pos);
            painter.pixel(x, y, c);
        }
    }

    fn resize(&mut self, direction: Direction, editor: &mut Editor) -> Result<()> {
        let (width, height) = (editor.grid.width(), editor.grid.height());
        match direction {
            Direction::Up if height > 1 => Self::crop_to(editor, width, height - 1)?,
            Direction::Down => Self::crop_to(editor, width, height + 1)?,
            Direction::Left if width > 1 => Self::crop_to(editor, width - 1, height)?,
            Direction::Right => Self::crop_to(editor, width + 1, height)?,
            Direction::Up | Direction::Left => return Ok(()),
        }
        self.fit(&editor.grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pixedit_common::color;
    use pixedit_common::config::EditorConfig;
    use pixedit_input::MouseButton;
    use pixedit_tools::ToolKind;

    use super::*;

    fn editor(width: usize, height: usize) -> Editor {
        let mut editor = Editor::new(PixelGrid::new(width, height), &EditorConfig::default());
        editor.colors.set(Which::Primary, color::RED);
        editor
    }

    fn mouse(kind: MouseKind, button: MouseButton, x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(kind, button, x, y)
    }

    #[test]
    fn pixels_are_two_columns_wide() {
        let editor = editor(4, 3);
        let area = DrawArea::new(3, 3, &editor.grid);
        assert_eq!(area.frame().area, Rect::new(3, 3, 8, 3));
        assert_eq!(area.to_grid(3, 3, &editor.grid), Some(Pos::new(0, 0)));
        assert_eq!(area.to_grid(4, 3, &editor.grid), Some(Pos::new(0, 0)));
        assert_eq!(area.to_grid(5, 4, &editor.grid), Some(Pos::new(1, 1)));
        assert_eq!(area.to_grid(10, 5, &editor.grid), Some(Pos::new(3, 2)));
        assert_eq!(area.to_grid(11, 5, &editor.grid), None);
        assert_eq!(area.to_screen(Pos::new(3, 2)), (9, 5));
    }

    #[test]
    fn clamps_positions_outside_the_canvas() {
        let editor = editor(4, 3);
        let area = DrawArea::new(3, 3, &editor.grid);
        assert_eq!(area.to_grid_clamped(1, 1, &editor.grid), Some(Pos::new(0, 0)));
        assert_eq!(area.to_grid_clamped(40, 4, &editor.grid), Some(Pos::new(3, 1)));
        assert_eq!(area.to_grid_clamped(6, 30, &editor.grid), Some(Pos::new(1, 2)));
    }

    #[test]
    fn pencil_paints_through_the_tool_set() {
        let mut editor = editor(4, 3);
        let mut area = DrawArea::new(3, 3, &editor.grid);
        let mut painter = Painter::new();

        let press = mouse(MouseKind::Down, MouseButton::LEFT, 5, 4);
        assert!(area.on_mouse(&press, &mut editor, &mut painter).expect("press"));
        assert!(area.is_capturing());
        assert_eq!(editor.grid.get(Pos::new(1, 1)), color::RED);
        assert!(!painter.is_empty());

        let release = mouse(MouseKind::Up, MouseButton::LEFT, 5, 4);
        let _ = area.on_mouse(&release, &mut editor, &mut painter).expect("release");
        assert!(!area.is_capturing());
    }

    #[test]
    fn line_released_outside_is_clamped() {
        let mut editor = editor(4, 3);
        editor.tools.select(ToolKind::Line);
        let mut area = DrawArea::new(3, 3, &editor.grid);
        let mut painter = Painter::new();

        let press = mouse(MouseKind::Down, MouseButton::LEFT, 3, 3);
        let _ = area.on_mouse(&press, &mut editor, &mut painter).expect("press");
        let release = mouse(MouseKind::Up, MouseButton::LEFT, 60, 3);
        assert!(area.on_mouse(&release, &mut editor, &mut painter).expect("release"));

        for x in 0..4 {
            assert_eq!(editor.grid.get(Pos::new(x, 0)), color::RED);
        }
        assert_eq!(editor.grid.get(Pos::new(0, 1)), color::WHITE);
    }

    #[test]
    fn middle_button_picks_color() {
        let mut editor = editor(2, 2);
        editor.grid.set(Pos::new(1, 0), color::CYAN);
        let mut area = DrawArea::new(3, 3, &editor.grid);
        let mut painter = Painter::new();

        let press = mouse(MouseKind::Down, MouseButton::MIDDLE, 5, 3);
        assert!(area.on_mouse(&press, &mut editor, &mut painter).expect("pick"));
        assert_eq!(editor.colors.primary(), color::CYAN);
        assert!(!area.is_capturing());
    }

    #[test]
    fn resizing_crops_the_image() {
        let mut editor = editor(3, 3);
        let mut area = DrawArea::new(3, 3, &editor.grid);
        area.resize(Direction::Right, &mut editor).expect("grow");
        area.resize(Direction::Up, &mut editor).expect("shrink");
        assert_eq!((editor.grid.width(), editor.grid.height()), (4, 2));
        assert_eq!(area.frame().area, Rect::new(3, 3, 8, 2));

        let mut tiny = self::editor(1, 1);
        area.fit(&tiny.grid);
        area.resize(Direction::Left, &mut tiny).expect("no-op");
        assert_eq!(tiny.grid.width(), 1);
    }
}

//! Color swatches.

use pixedit_canvas::Which;
use pixedit_common::color::{Color, Hsl};
use pixedit_common::error::Result;
use pixedit_input::{MouseEvent, MouseKind};
use ratatui::layout::Rect;

use crate::editor::Editor;
use crate::painter::Painter;
use crate::widget::{Direction, Frame, Widget};

/// Hue increment between generated swatches; the golden ratio keeps
/// consecutive hues far apart.
const HUE_STEP: f64 = 0.618_033_988_749_895;

/// A generated swatch color for slot `index`.
#[allow(clippy::cast_precision_loss)]
fn generated(index: usize) -> Color {
    Color::from_hsl(Hsl {
        h: (index as f64 * HUE_STEP).fract(),
        s: 0.65,
        l: 0.55,
    })
}

/// A grid of two-column swatches. Left or middle click picks the primary
/// color, right click the secondary.
#[derive(Debug)]
pub struct Palette {
    frame: Frame,
    colors: Vec<Color>,
}

impl Palette {
    /// Places a palette of `columns`×`rows` swatches at column `left`, row
    /// `top`. Slots beyond `colors` get generated hues.
    #[must_use]
    pub fn new(left: u16, top: u16, columns: u16, rows: u16, colors: Vec<Color>) -> Self {
        let mut palette = Self {
            frame: Frame::new(Rect::new(left, top, columns.saturating_mul(2), rows)),
            colors,
        };
        palette.fill_visible();
        palette
    }

    fn columns(&self) -> usize {
        usize::from(self.frame.area.width / 2)
    }

    fn rows(&self) -> usize {
        usize::from(self.frame.area.height)
    }

    fn fill_visible(&mut self) {
        let visible = self.columns() * self.rows();
        while self.colors.len() < visible {
            self.colors.push(generated(self.colors.len()));
        }
    }

    /// Swatches in row-major order, including hidden ones.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The swatch under terminal cell `(x, y)`.
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        if !self.frame.contains(x, y) {
            return None;
        }
        let area = self.frame.area;
        let column = usize::from(x - area.x) / 2;
        if column >= self.columns() {
            return None;
        }
        let index = usize::from(y - area.y) * self.columns() + column;
        self.colors.get(index).copied()
    }
}

impl Widget for Palette {
    fn name(&self) -> &'static str {
        "palette"
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
        _painter: &mut Painter,
    ) -> Result<bool> {
        // drags and releases fall through so strokes can pass over the palette
        if ev.kind != MouseKind::Down {
            return Ok(false);
        }
        let which = if ev.button.is_left() || ev.button.is_middle() {
            Which::Primary
        } else if ev.button.is_right() {
            Which::Secondary
        } else {
            return Ok(false);
        };
        if let Some(color) = self.color_at(ev.x, ev.y) {
            editor.colors.set(which, color);
        }
        Ok(true)
    }

    fn render(&self, _editor: &Editor, painter: &mut Painter) {
        self.frame.render(painter);
        let area = self.frame.area;
        let columns = self.columns();
        if columns == 0 {
            return;
        }
        for (index, color) in self.colors.iter().take(columns * self.rows()).enumerate() {
            let (row, column) = (index / columns, index % columns);
            let x = area.x.saturating_add(u16::try_from(column * 2).unwrap_or(u16::MAX));
            let y = area.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
            painter.pixel(x, y, *color);
        }
    }

    fn resize(&mut self, direction: Direction, _editor: &mut Editor) -> Result<()> {
        let area = &mut self.frame.area;
        match direction {
            Direction::Up if area.height > 1 => area.height -= 1,
            Direction::Down => area.height = area.height.saturating_add(1),
            Direction::Left if area.width > 2 => area.width -= 2,
            Direction::Right => area.width = area.width.saturating_add(2),
            _ => {}
        }
        self.fill_visible();
        Ok(())
    }
}

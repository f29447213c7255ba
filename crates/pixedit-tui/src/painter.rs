//! Buffered terminal drawing.
//!
//! Coordinates are 1-based terminal columns and rows, the same space mouse
//! reports arrive in. Output accumulates in memory until the caller takes
//! it and writes it to the terminal in one go.

use crossterm::style::{self, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use pixedit_common::color::{self, Color};
use pixedit_common::constants::FILLED_PIXEL;
use ratatui::layout::Rect;

/// Box-drawing characters for widget borders.
#[derive(Debug, Clone, Copy)]
pub struct Borders {
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
    /// Corners: top-left, top-right, bottom-left, bottom-right.
    pub corners: [char; 4],
}

/// Thin lines with square corners.
pub const SHARP: Borders = Borders {
    horizontal: '─',
    vertical: '│',
    corners: ['┌', '┐', '└', '┘'],
};

/// Collects escape sequences for one frame of drawing.
#[derive(Debug, Default)]
pub struct Painter {
    buf: Vec<u8>,
}

const fn rgb(c: Color) -> style::Color {
    let (r, g, b) = c.rgb();
    style::Color::Rgb { r, g, b }
}

impl Painter {
    /// Creates an empty painter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `text` starting at column `x`, row `y`. Positions left of or
    /// above the screen are skipped.
    pub fn text(&mut self, x: u16, y: u16, text: &str, color: Color) {
        if x == 0 || y == 0 {
            return;
        }
        // writes into a Vec cannot fail
        let _ = queue!(
            self.buf,
            cursor::MoveTo(x - 1, y - 1),
            SetForegroundColor(rgb(color)),
            Print(text),
            ResetColor
        );
    }

    /// Draws one canvas pixel, two columns wide.
    pub fn pixel(&mut self, x: u16, y: u16, color: Color) {
        self.text(x, y, FILLED_PIXEL, color);
    }

    /// Draws a one-column swatch.
    pub fn swatch(&mut self, x: u16, y: u16, color: Color) {
        self.text(x, y, "█", color);
    }

    /// Draws a border one cell outside `area`.
    pub fn frame(&mut self, area: Rect, borders: &Borders, color: Color) {
        let (x0, y0) = (area.x.saturating_sub(1), area.y.saturating_sub(1));
        let (x1, y1) = (area.right(), area.bottom());
        let [top_left, top_right, bottom_left, bottom_right] = borders.corners;

        let horizontal = borders
            .horizontal
            .to_string()
            .repeat(usize::from(x1.saturating_sub(x0).saturating_sub(1)));
        self.text(x0, y0, &format!("{top_left}{horizontal}{top_right}"), color);
        self.text(x0, y1, &format!("{bottom_left}{horizontal}{bottom_right}"), color);

        let vertical = borders.vertical.to_string();
        for y in (y0 + 1)..y1 {
            self.text(x0, y, &vertical, color);
            self.text(x1, y, &vertical, color);
        }
    }

    /// Writes `text` padded with spaces (or cut) to exactly `width` columns.
    pub fn line(&mut self, x: u16, y: u16, text: &str, width: usize, color: Color) {
        let fitted: String = text
            .chars()
            .chain(std::iter::repeat(' '))
            .take(width)
            .collect();
        self.text(x, y, &fitted, color);
    }

    /// Clears the whole screen.
    pub fn clear(&mut self) {
        let _ = queue!(self.buf, terminal::Clear(terminal::ClearType::All));
    }

    /// True when nothing has been drawn since the last [`Painter::take`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Hands out the buffered output and starts a new frame.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Foreground used for plain labels.
pub const LABEL: Color = color::WHITE;

/// Foreground used for inactive entries and hints.
pub const DIM: Color = color::GRAY;

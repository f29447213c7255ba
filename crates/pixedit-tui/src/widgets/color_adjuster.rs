//! Fine color adjustment strips.
//!
//! Layout, relative to the top-left content cell:
//!
//! ```text
//! row 0   ██ #rrggbb      primary
//! row 1   ██ #rrggbb      secondary
//! row 3-5 R/G/B strips    primary shifted per channel, with values
//! row 7-9 H/S/L strips    primary shifted in HSL, with values
//! ```
//!
//! Each strip is centered on the unchanged color; neighbouring cells differ
//! by one step. Scrolling over the widget changes the step.

use pixedit_canvas::{DualColor, Which};
use pixedit_common::color::Color;
use pixedit_common::constants::{MAX_ADJUST_STEP, MIN_ADJUST_STEP};
use pixedit_common::error::Result;
use pixedit_input::{MouseButton, MouseEvent, MouseKind};
use ratatui::layout::Rect;

use crate::editor::Editor;
use crate::painter::{self, Painter};
use crate::widget::{Direction, Frame, Widget};

/// How much one scroll notch changes the step.
const STEP_CHANGE: f64 = 0.005;

/// Default content width.
pub const DEFAULT_WIDTH: u16 = 17;

const MIN_WIDTH: u16 = 11;
const MAX_WIDTH: u16 = 50;
const HEIGHT: u16 = 10;

/// Shows both selected colors and strips of nearby colors to pick from.
#[derive(Debug)]
pub struct ColorAdjuster {
    frame: Frame,
    step: f64,
}

impl ColorAdjuster {
    /// Places the adjuster at column `left`, row `top`.
    #[must_use]
    pub fn new(left: u16, top: u16, step: f64) -> Self {
        Self {
            frame: Frame::new(Rect::new(left, top, DEFAULT_WIDTH, HEIGHT)),
            step: step.clamp(MIN_ADJUST_STEP, MAX_ADJUST_STEP),
        }
    }

    /// Current distance between neighbouring strip cells.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    fn rgb_width(&self) -> u16 {
        self.frame.area.width.saturating_sub(4)
    }

    fn hsl_width(&self) -> u16 {
        self.frame.area.width.saturating_sub(6)
    }

    /// Every clickable cell with the color it stands for.
    #[allow(clippy::cast_possible_truncation)]
    fn swatches(&self, colors: &DualColor) -> Vec<(u16, u16, Color)> {
        let Rect { x: left, y: top, .. } = self.frame.area;
        let primary = colors.primary();
        let mut cells = vec![
            (left + 1, top, primary),
            (left + 2, top, primary),
            (left + 1, top + 1, colors.secondary()),
            (left + 2, top + 1, colors.secondary()),
        ];

        let rgb_width = self.rgb_width();
        for i in 0..rgb_width {
            let offset = f64::from(i) - f64::from(rgb_width / 2);
            let delta = (self.step * 255.0 * offset).round() as i32;
            let x = left + 1 + i;
            cells.push((x, top + 3, primary.add_rgb(delta, 0, 0)));
            cells.push((x, top + 4, primary.add_rgb(0, delta, 0)));
            cells.push((x, top + 5, primary.add_rgb(0, 0, delta)));
        }

        let hsl_width = self.hsl_width();
        for i in 0..hsl_width {
            let delta = self.step * (f64::from(i) - f64::from(hsl_width / 2));
            let x = left + 1 + i;
            cells.push((x, top + 7, primary.add_hsl(delta, 0.0, 0.0)));
            cells.push((x, top + 8, primary.add_hsl(0.0, delta, 0.0)));
            cells.push((x, top + 9, primary.add_hsl(0.0, 0.0, delta)));
        }
        cells
    }

    fn scroll(&mut self, button: MouseButton) {
        if button.without_modifiers() == MouseButton::SCROLL_UP {
            self.step = (self.step - STEP_CHANGE).max(MIN_ADJUST_STEP);
        } else {
            self.step = (self.step + STEP_CHANGE).min(MAX_ADJUST_STEP);
        }
        tracing::debug!(step = self.step, "adjuster step changed");
    }
}

impl Widget for ColorAdjuster {
    fn name(&self) -> &'static str {
        "color adjuster"
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
        if ev.kind == MouseKind::Up {
            return Ok(false);
        }
        if ev.button.is_scroll() {
            self.scroll(ev.button);
            self.render(editor, painter);
            return Ok(true);
        }

        let which = if ev.button.is_right() {
            Which::Secondary
        } else {
            Which::Primary
        };
        let picked = self
            .swatches(&editor.colors)
            .into_iter()
            .find(|&(x, y, _)| x == ev.x && y == ev.y)
            .map(|(_, _, color)| color);
        if let Some(color) = picked {
            editor.colors.set(which, color);
        }
        Ok(true)
    }

    fn render(&self, editor: &Editor, painter: &mut Painter) {
        self.frame.render(painter);
        let Rect {
            x: left,
            y: top,
            width,
            ..
        } = self.frame.area;
        let width = usize::from(width);
        let colors = &editor.colors;

        painter.line(left, top, &format!("    {}", colors.primary().hex()), width, painter::LABEL);
        painter.line(left, top + 1, &format!("    {}", colors.secondary().hex()), width, painter::LABEL);
        for blank in [top + 2, top + 6] {
            painter.line(left, blank, "", width, painter::LABEL);
        }

        let primary = colors.primary();
        let rgb_values = left + 1 + self.rgb_width();
        for (row, (label, value)) in
            [("R", primary.r), ("G", primary.g), ("B", primary.b)].into_iter().enumerate()
        {
            let y = top + 3 + u16::try_from(row).unwrap_or(0);
            painter.text(left, y, label, painter::LABEL);
            painter.text(rgb_values, y, &format!("{value:3}"), painter::LABEL);
        }

        let hsl = primary.hsl();
        let hsl_values = left + 1 + self.hsl_width();
        for (row, (label, value)) in [("H", hsl.h), ("S", hsl.s), ("L", hsl.l)].into_iter().enumerate() {
            let y = top + 7 + u16::try_from(row).unwrap_or(0);
            painter.text(left, y, label, painter::LABEL);
            painter.text(hsl_values, y, &format!("{value:.3}"), painter::LABEL);
        }

        for (x, y, color) in self.swatches(colors) {
            painter.swatch(x, y, color);
        }
    }

    fn resize(&mut self, direction: Direction, _editor: &mut Editor) -> Result<()> {
        let area = &mut self.frame.area;
        match direction {
            Direction::Left if area.width > MIN_WIDTH => area.width -= 2,
            Direction::Right if area.width < MAX_WIDTH => area.width += 2,
            _ => {}
        }
        Ok(())
    }
}

//! Linear and radial gradients.
//!
//! Modifiers are read once, at press time: CTRL makes the sweep radial and
//! ALT interpolates in HSL instead of RGB. The left button blends primary
//! into secondary, the right button the other way round.

use std::collections::HashMap;
use std::fmt;

use pixedit_canvas::PixelGrid;
use pixedit_common::color::{self, Color};
use pixedit_common::error::Result;
use pixedit_common::types::Pos;

use crate::event::DrawEvent;
use crate::tool::{DrawFn, Tool};

/// Geometry of a gradient sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepShape {
    /// Bands perpendicular to the anchor→pointer segment.
    Linear,
    /// Rings centered on the anchor.
    Radial,
}

/// Color space the endpoints are blended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Per-channel blend.
    Rgb,
    /// Hue along the shorter arc, linear saturation and lightness.
    Hsl,
}

impl fmt::Display for SweepShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Radial => write!(f, "radial"),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => write!(f, "rgb"),
            Self::Hsl => write!(f, "hsl"),
        }
    }
}

/// A gradient gesture in progress.
#[derive(Debug, Clone)]
struct Sweep {
    anchor: Pos,
    from: Color,
    to: Color,
    shape: SweepShape,
    space: ColorSpace,
    /// Last preview, kept as colors so stale cells can be restored.
    drawn: HashMap<Pos, Color>,
}

impl Sweep {
    fn blend(&self, t: f64) -> Result<Color> {
        match self.space {
            ColorSpace::Rgb => color::lerp_rgb(self.from, self.to, t),
            ColorSpace::Hsl => color::lerp_hsl(self.from, self.to, t),
        }
    }

    /// Every cell covered by the sweep towards `end`, with its color, in
    /// row-major order.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn cells(&self, grid: &PixelGrid, end: Pos) -> Result<Vec<(Pos, Color)>> {
        let (ax, ay) = (self.anchor.x as f64, self.anchor.y as f64);
        let dx = end.x as f64 - ax;
        let dy = end.y as f64 - ay;
        let len_sq = dx.mul_add(dx, dy * dy);
        if len_sq == 0.0 {
            return Ok(vec![(self.anchor, self.blend(0.0)?)]);
        }

        let mut cells = Vec::new();
        match self.shape {
            SweepShape::Linear => {
                for (pos, _) in grid.iter() {
                    let vx = pos.x as f64 - ax;
                    let vy = pos.y as f64 - ay;
                    let dot = vx.mul_add(dx, vy * dy);
                    if dot < 0.0 || dot > len_sq {
                        continue;
                    }
                    cells.push((pos, self.blend((dot / len_sq).clamp(0.0, 1.0))?));
                }
            }
            SweepShape::Radial => {
                let reach = len_sq.sqrt().ceil() as usize;
                let x_range = self.anchor.x.saturating_sub(reach)
                    ..=(self.anchor.x + reach).min(grid.width() - 1);
                let y_range = self.anchor.y.saturating_sub(reach)
                    ..=(self.anchor.y + reach).min(grid.height() - 1);
                for y in y_range {
                    for x in x_range.clone() {
                        let vx = x as f64 - ax;
                        let vy = y as f64 - ay;
                        let dist_sq = vx.mul_add(vx, vy * vy);
                        if dist_sq <= len_sq {
                            let t = (dist_sq / len_sq).sqrt().min(1.0);
                            cells.push((Pos::new(x, y), self.blend(t)?));
                        }
                    }
                }
            }
        }
        Ok(cells)
    }

    /// Draws the sweep towards `end` and restores cells of the previous
    /// preview it no longer covers.
    fn redraw(&mut self, grid: &PixelGrid, end: Pos, draw: &mut DrawFn<'_>) -> Result<()> {
        let cells = self.cells(grid, end)?;
        for &(pos, c) in &cells {
            draw(pos, c);
        }
        let next: HashMap<Pos, Color> = cells.into_iter().collect();
        for pos in self.drawn.keys() {
            if !next.contains_key(pos) {
                draw(*pos, grid.get(*pos));
            }
        }
        self.drawn = next;
        Ok(())
    }

    fn erase(&self, grid: &PixelGrid, draw: &mut DrawFn<'_>) {
        for pos in self.drawn.keys() {
            draw(*pos, grid.get(*pos));
        }
    }
}

/// Gradient gesture state.
#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Tracking(Box<Sweep>),
}

/// Blends the two selected colors across a linear or radial sweep.
#[derive(Debug, Clone, Default)]
pub struct Gradient {
    state: State,
}

impl Gradient {
    /// Creates an idle gradient tool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape and color space of the sweep in progress.
    #[must_use]
    pub fn mode(&self) -> Option<(SweepShape, ColorSpace)> {
        match &self.state {
            State::Idle => None,
            State::Tracking(sweep) => Some((sweep.shape, sweep.space)),
        }
    }
}

impl Tool for Gradient {
    fn name(&self) -> &'static str {
        "Gradient"
    }

    fn on_press(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        if let State::Tracking(sweep) = &self.state {
            tracing::debug!("gradient cancelled by second press");
            sweep.erase(grid, draw);
            self.reset();
            return Ok(true);
        }
        if !ev.is_paint_button() {
            return Ok(false);
        }

        let (primary, secondary) = (ev.colors.primary(), ev.colors.secondary());
        let (from, to) = if ev.button.is_right() {
            (secondary, primary)
        } else {
            (primary, secondary)
        };
        let mut sweep = Box::new(Sweep {
            anchor: ev.pos,
            from,
            to,
            shape: if ev.button.ctrl() { SweepShape::Radial } else { SweepShape::Linear },
            space: if ev.button.alt() { ColorSpace::Hsl } else { ColorSpace::Rgb },
            drawn: HashMap::new(),
        });
        tracing::debug!(anchor = %ev.pos, shape = %sweep.shape, space = %sweep.space, "gradient started");
        sweep.redraw(grid, ev.pos, draw)?;
        self.state = State::Tracking(sweep);
        Ok(true)
    }

    fn on_drag(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        let State::Tracking(sweep) = &mut self.state else {
            return Ok(false);
        };
        sweep.redraw(grid, ev.pos, draw)?;
        Ok(true)
    }

    fn on_release(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        let State::Tracking(sweep) = &mut self.state else {
            return Ok(false);
        };
        sweep.redraw(grid, ev.pos, draw)?;
        for (pos, c) in &sweep.drawn {
            grid.set(*pos, *c);
        }
        tracing::debug!(end = %ev.pos, cells = sweep.drawn.len(), "gradient committed");
        self.reset();
        Ok(true)
    }

    fn reset(&mut self) {
        self.state = State::Idle;
    }

    fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }
}

//! Freehand pencil.

use pixedit_canvas::PixelGrid;
use pixedit_common::error::Result;

use crate::event::DrawEvent;
use crate::tool::{DrawFn, Tool};

/// Paints the pixel under the pointer on press and on every drag step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pencil;

impl Pencil {
    fn paint(grid: &mut PixelGrid, ev: &DrawEvent<'_>, draw: &mut DrawFn<'_>) -> bool {
        if !ev.is_paint_button() {
            return false;
        }
        let color = ev.active_color();
        draw(ev.pos, color);
        grid.set(ev.pos, color);
        true
    }
}

impl Tool for Pencil {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn on_press(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        Ok(Self::paint(grid, ev, draw))
    }

    fn on_drag(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        Ok(Self::paint(grid, ev, draw))
    }

    fn on_release(
        &mut self,
        _grid: &mut PixelGrid,
        _ev: &DrawEvent<'_>,
        _draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn reset(&mut self) {}

    fn is_idle(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use pixedit_common::color;
    use pixedit_common::types::Pos;
    use pixedit_input::{MouseButton, MouseKind};

    use super::*;
    use crate::testing::{self, Screen};

    #[test]
    fn press_and_drag_commit_immediately() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(4, 4);
        let mut screen = Screen::of(&grid);
        let mut pencil = Pencil;
        let mut draw = |p, c| screen.draw(p, c);

        let press = testing::event(&colors, MouseKind::Down, MouseButton::LEFT, 1, 1);
        assert!(pencil.on_press(&mut grid, &press, &mut draw).expect("press"));
        let drag = testing::event(&colors, MouseKind::Drag, MouseButton::RIGHT, 2, 1);
        assert!(pencil.on_drag(&mut grid, &drag, &mut draw).expect("drag"));
        let release = testing::event(&colors, MouseKind::Up, MouseButton::RIGHT, 2, 1);
        assert!(!pencil.on_release(&mut grid, &release, &mut draw).expect("release"));

        assert_eq!(grid.get(Pos::new(1, 1)), color::RED);
        assert_eq!(grid.get(Pos::new(2, 1)), color::BLUE);
        assert_eq!(screen.cells[&Pos::new(2, 1)], color::BLUE);
        assert!(pencil.is_idle());
    }

    #[test]
    fn middle_button_is_ignored() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(2, 2);
        let press = testing::event(&colors, MouseKind::Down, MouseButton::MIDDLE, 0, 0);
        assert!(!Pencil.on_press(&mut grid, &press, &mut |_: Pos, _: color::Color| {}).expect("press"));
        assert_eq!(grid.get(Pos::new(0, 0)), color::WHITE);
    }
}

//! Bucket fill.

use std::collections::HashSet;

use pixedit_canvas::PixelGrid;
use pixedit_common::color::Color;
use pixedit_common::error::Result;
use pixedit_common::types::Pos;

use crate::event::DrawEvent;
use crate::tool::{DrawFn, Tool};

/// Recolors the 4-connected region of uniform color under the pointer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fill;

impl Fill {
    /// Floods from `origin` with `target`, drawing and committing each cell.
    /// Returns the number of recolored cells.
    pub fn flood(grid: &mut PixelGrid, origin: Pos, target: Color, draw: &mut DrawFn<'_>) -> usize {
        let source = grid.get(origin);
        if source == target {
            return 0;
        }

        let mut visited = HashSet::new();
        let mut stack = vec![origin];
        while let Some(pos) = stack.pop() {
            if grid.get(pos) != source {
                continue;
            }
            draw(pos, target);
            grid.set(pos, target);
            let _ = visited.insert(pos);

            for next in neighbors(grid, pos) {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
        }
        visited.len()
    }

    fn apply(grid: &mut PixelGrid, ev: &DrawEvent<'_>, draw: &mut DrawFn<'_>) -> bool {
        if !ev.is_paint_button() {
            return false;
        }
        let filled = Self::flood(grid, ev.pos, ev.active_color(), draw);
        if filled > 0 {
            tracing::debug!(origin = %ev.pos, cells = filled, "flood fill");
        }
        true
    }
}

fn neighbors(grid: &PixelGrid, pos: Pos) -> impl Iterator<Item = Pos> {
    let (width, height) = (grid.width(), grid.height());
    [
        pos.x.checked_sub(1).map(|x| Pos::new(x, pos.y)),
        (pos.x + 1 < width).then(|| Pos::new(pos.x + 1, pos.y)),
        pos.y.checked_sub(1).map(|y| Pos::new(pos.x, y)),
        (pos.y + 1 < height).then(|| Pos::new(pos.x, pos.y + 1)),
    ]
    .into_iter()
    .flatten()
}

impl Tool for Fill {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn on_press(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        Ok(Self::apply(grid, ev, draw))
    }

    fn on_drag(
        &mut self,
        grid: &mut PixelGrid,
        ev: &DrawEvent<'_>,
        draw: &mut DrawFn<'_>,
    ) -> Result<bool> {
        Ok(Self::apply(grid, ev, draw))
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
    use pixedit_input::{MouseButton, MouseKind};

    use super::*;
    use crate::testing::{self, Screen};

    #[test]
    fn fills_whole_uniform_grid() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(4, 4);
        let mut screen = Screen::of(&grid);
        let mut draw = |p, c| screen.draw(p, c);

        let press = testing::event(&colors, MouseKind::Down, MouseButton::LEFT, 1, 1);
        assert!(Fill.on_press(&mut grid, &press, &mut draw).expect("fill"));

        assert!(grid.iter().all(|(_, c)| c == color::RED));
        assert_eq!(screen.draws, 16);
        assert!(screen.cells.values().all(|c| *c == color::RED));
    }

    #[test]
    fn stops_at_region_border() {
        // 5x5 with a black ring around (1..=3, 1..=3); fill the middle.
        let mut grid = PixelGrid::new(5, 5);
        for i in 1..=3 {
            for (x, y) in [(i, 1), (i, 3), (1, i), (3, i)] {
                grid.set(Pos::new(x, y), color::BLACK);
            }
        }
        let before = grid.clone();

        let filled = Fill::flood(&mut grid, Pos::new(2, 2), color::GREEN, &mut |_: Pos, _: Color| {});
        assert_eq!(filled, 1);
        for (pos, c) in grid.iter() {
            if pos == Pos::new(2, 2) {
                assert_eq!(c, color::GREEN);
            } else {
                assert_eq!(c, before.get(pos), "{pos}");
            }
        }
    }

    #[test]
    fn same_color_is_a_consumed_no_op() {
        let colors = testing::colors();
        let mut grid = PixelGrid::filled(3, 3, color::BLUE);
        let mut draws = 0;
        let press = testing::event(&colors, MouseKind::Down, MouseButton::RIGHT, 0, 0);
        assert!(Fill.on_press(&mut grid, &press, &mut |_: Pos, _: Color| draws += 1).expect("fill"));
        assert_eq!(draws, 0);
        assert!(grid.iter().all(|(_, c)| c == color::BLUE));
    }

    #[test]
    fn outer_ring_fill_leaves_enclosed_cell() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set(Pos::new(1, 0), color::BLACK);
        grid.set(Pos::new(0, 1), color::BLACK);
        grid.set(Pos::new(2, 1), color::BLACK);
        grid.set(Pos::new(1, 2), color::BLACK);

        let filled = Fill::flood(&mut grid, Pos::new(0, 0), color::RED, &mut |_: Pos, _: Color| {});
        assert_eq!(filled, 1);
        assert_eq!(grid.get(Pos::new(1, 1)), color::WHITE);
        assert_eq!(grid.get(Pos::new(2, 2)), color::WHITE);
    }
}

//! Rectangle outlines.

use pixedit_common::types::Pos;

use crate::shape::{Shape, ShapeTool};

/// Perimeter of the axis-aligned rectangle spanned by two corners.
#[derive(Debug, Clone, Copy)]
pub struct RectangleShape;

/// Rectangle outline tool.
pub type RectangleTool = ShapeTool<RectangleShape>;

impl Shape for RectangleShape {
    const NAME: &'static str = "Rectangle";

    fn trace(from: Pos, to: Pos) -> Vec<Pos> {
        let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
        let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));

        if x0 == x1 {
            return (y0..=y1).map(|y| Pos::new(x0, y)).collect();
        }
        if y0 == y1 {
            return (x0..=x1).map(|x| Pos::new(x, y0)).collect();
        }

        let mut cells = Vec::with_capacity(2 * (x1 - x0 + y1 - y0));
        for y in y0..=y1 {
            if y == y0 || y == y1 {
                cells.extend((x0..=x1).map(|x| Pos::new(x, y)));
            } else {
                cells.push(Pos::new(x0, y));
                cells.push(Pos::new(x1, y));
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pixedit_canvas::PixelGrid;
    use pixedit_common::color;
    use pixedit_input::{MouseButton, MouseKind};

    use super::*;
    use crate::testing::{self, Screen};
    use crate::tool::Tool;

    fn set(cells: &[Pos]) -> HashSet<Pos> {
        cells.iter().copied().collect()
    }

    #[test]
    fn outline_skips_the_interior() {
        let cells = RectangleShape::trace(Pos::new(3, 3), Pos::new(1, 1));
        assert_eq!(cells.len(), 8);
        assert!(!set(&cells).contains(&Pos::new(2, 2)));
        assert!(set(&cells).contains(&Pos::new(1, 3)));
    }

    #[test]
    fn shared_axis_is_a_segment() {
        let cells = RectangleShape::trace(Pos::new(2, 0), Pos::new(2, 3));
        assert_eq!(
            cells,
            vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]
        );
        assert_eq!(RectangleShape::trace(Pos::new(1, 1), Pos::new(1, 1)), vec![Pos::new(1, 1)]);
    }

    #[test]
    fn drag_shrinks_preview_and_release_commits() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(5, 5);
        let mut screen = Screen::of(&grid);
        let mut tool = RectangleTool::new();
        let mut draw = |p, c| screen.draw(p, c);

        let press = testing::event(&colors, MouseKind::Down, MouseButton::LEFT, 0, 0);
        assert!(tool.on_press(&mut grid, &press, &mut draw).expect("press"));
        let far = testing::event(&colors, MouseKind::Drag, MouseButton::LEFT, 4, 4);
        assert!(tool.on_drag(&mut grid, &far, &mut draw).expect("drag"));
        let near = testing::event(&colors, MouseKind::Drag, MouseButton::LEFT, 2, 2);
        assert!(tool.on_drag(&mut grid, &near, &mut draw).expect("drag"));
        let release = testing::event(&colors, MouseKind::Up, MouseButton::LEFT, 2, 2);
        assert!(tool.on_release(&mut grid, &release, &mut draw).expect("release"));
        assert!(tool.is_idle());

        let outline = set(&RectangleShape::trace(Pos::new(0, 0), Pos::new(2, 2)));
        for (pos, c) in grid.iter() {
            let expected = if outline.contains(&pos) { color::RED } else { color::WHITE };
            assert_eq!(c, expected, "grid at {pos}");
            assert_eq!(screen.cells[&pos], expected, "screen at {pos}");
        }
    }

    #[test]
    fn returning_to_an_earlier_drag_point_restores_its_preview() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(6, 6);
        grid.set(Pos::new(3, 3), color::GREEN);
        let mut screen = Screen::of(&grid);
        let mut tool = RectangleTool::new();

        let press = testing::event(&colors, MouseKind::Down, MouseButton::LEFT, 1, 1);
        let _ = tool
            .on_press(&mut grid, &press, &mut |p, c| screen.draw(p, c))
            .expect("press");
        let first = testing::event(&colors, MouseKind::Drag, MouseButton::LEFT, 3, 4);
        let _ = tool
            .on_drag(&mut grid, &first, &mut |p, c| screen.draw(p, c))
            .expect("drag");
        let snapshot = screen.cells.clone();

        for (x, y) in [(5, 5), (0, 0), (1, 4), (5, 1), (3, 4)] {
            let drag = testing::event(&colors, MouseKind::Drag, MouseButton::LEFT, x, y);
            let _ = tool
                .on_drag(&mut grid, &drag, &mut |p, c| screen.draw(p, c))
                .expect("drag");
        }

        assert_eq!(screen.cells, snapshot);
        assert_eq!(grid.get(Pos::new(3, 3)), color::GREEN);
        assert_eq!(grid.iter().filter(|&(_, c)| c != color::WHITE).count(), 1);
    }

    #[test]
    fn second_press_cancels_without_commit() {
        let colors = testing::colors();
        let mut grid = PixelGrid::new(4, 4);
        let mut screen = Screen::of(&grid);
        let mut tool = RectangleTool::new();
        let mut draw = |p, c| screen.draw(p, c);

        let press = testing::event(&colors, MouseKind::Down, MouseButton::RIGHT, 0, 0);
        let _ = tool.on_press(&mut grid, &press, &mut draw).expect("press");
        let drag = testing::event(&colors, MouseKind::Drag, MouseButton::RIGHT, 3, 3);
        let _ = tool.on_drag(&mut grid, &drag, &mut draw).expect("drag");
        let cancel = testing::event(&colors, MouseKind::Down, MouseButton::MIDDLE, 3, 3);
        assert!(tool.on_press(&mut grid, &cancel, &mut draw).expect("cancel"));
        assert!(tool.is_idle());

        assert!(grid.iter().all(|(_, c)| c == color::WHITE));
        assert!(screen.cells.values().all(|c| *c == color::WHITE));
    }
}

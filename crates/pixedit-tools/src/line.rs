//! Straight lines.

use pixedit_common::types::Pos;

use crate::shape::{Shape, ShapeTool};

/// One-pixel-wide DDA line between two points.
#[derive(Debug, Clone, Copy)]
pub struct LineShape;

/// Line tool.
pub type LineTool = ShapeTool<LineShape>;

/// `n / d` rounded to the nearest integer, ties to even, for `d > 0`.
const fn div_round(n: i64, d: i64) -> i64 {
    let q = n.div_euclid(d);
    let twice_rem = 2 * n.rem_euclid(d);
    if twice_rem > d || (twice_rem == d && q % 2 != 0) {
        q + 1
    } else {
        q
    }
}

#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn walk(from: (usize, usize), to: (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    // Always walk towards the larger major coordinate so both directions
    // produce the same cells.
    let (start, end) = if from.0 <= to.0 { (from, to) } else { (to, from) };
    let major_delta = (end.0 - start.0) as i64;
    let minor_delta = end.1 as i64 - start.1 as i64;
    (0..=major_delta).map(move |step| {
        let minor = start.1 as i64 + div_round(minor_delta * step, major_delta.max(1));
        (start.0 + step as usize, minor as usize)
    })
}

impl Shape for LineShape {
    const NAME: &'static str = "Line";

    fn trace(from: Pos, to: Pos) -> Vec<Pos> {
        if from.y == to.y {
            let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
            return (x0..=x1).map(|x| Pos::new(x, from.y)).collect();
        }
        if from.x == to.x {
            let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
            return (y0..=y1).map(|y| Pos::new(from.x, y)).collect();
        }

        if from.x.abs_diff(to.x) >= from.y.abs_diff(to.y) {
            walk((from.x, from.y), (to.x, to.y))
                .map(|(x, y)| Pos::new(x, y))
                .collect()
        } else {
            walk((from.y, from.x), (to.y, to.x))
                .map(|(y, x)| Pos::new(x, y))
                .collect()
        }
    }
}

//! Pure convex hull of a `PointSet` (no events, no state).
//!
//! Andrew's monotone chain with the scanner's turn policy: the upper chain is
//! built left to right, the lower chain right to left, each keeping only strict
//! right turns. The result is clockwise, starts at the leftmost point (ties by
//! minimum y), and contains no collinear or coincident vertices.
//!
//! Code cross-refs: `orient::Turn::keeps`, `scan::HullScanner`.

use crate::orient::turn;
use crate::{Point, PointSet};

/// Stack scan over `points` in the given order, popping every non-right turn.
fn chain<'a, I>(points: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut out: Vec<Point> = Vec::new();
    for p in points {
        while let [.., a, b] = out[..] {
            if turn(&a, &b, p).keeps() {
                break;
            }
            out.pop();
        }
        out.push(*p);
    }
    out
}

/// Upper chain, leftmost to rightmost. Expects `sorted` in canonical order.
pub fn upper_chain(sorted: &[Point]) -> Vec<Point> {
    chain(sorted)
}

/// Lower chain, rightmost back to leftmost. Expects `sorted` in canonical order.
pub fn lower_chain(sorted: &[Point]) -> Vec<Point> {
    chain(sorted.iter().rev())
}

/// Hull vertices of `points` in clockwise order from the leftmost point.
///
/// Degenerate inputs: no points give an empty hull, a single point gives
/// itself, collinear sets give their two extremes, coincident sets collapse to
/// one vertex. `points` is left untouched.
pub fn compute_hull(points: &PointSet) -> Vec<Point> {
    if points.len() <= 1 {
        return points.as_slice().to_vec();
    }
    let mut sorted = points.as_slice().to_vec();
    sorted.sort_by(Point::cmp_xy);

    let upper = upper_chain(&sorted);
    let lower = lower_chain(&sorted);

    // Both chains share their endpoints; keep them once, from the upper chain.
    let inner = lower.len().saturating_sub(1);
    let mut hull = upper;
    hull.extend(lower.into_iter().take(inner).skip(1));

    hull.dedup_by(|a, b| a.coincides(b));
    while hull.len() > 1 && hull[0].coincides(&hull[hull.len() - 1]) {
        hull.pop();
    }

    if let Some(start) = leftmost(&hull) {
        hull.rotate_left(start);
    }
    hull
}

fn leftmost(hull: &[Point]) -> Option<usize> {
    hull.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp_xy(b))
        .map(|(k, _)| k)
}

#[cfg(test)]
mod tests;

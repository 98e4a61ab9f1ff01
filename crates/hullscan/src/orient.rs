//! Orientation predicate for three ordered points.
//!
//! The sign of the 2D cross product decides the turn; no slopes are formed, so
//! vertical segments and coincident points need no special casing.

use crate::Point;

/// Direction of the path `p1 → p2 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
    /// Collinear (including coincident points).
    Straight,
}

impl Turn {
    /// Chain policy shared by the scanner and `compute_hull`: only strict
    /// right turns stay on the chain; collinear middle points are dropped.
    #[inline]
    pub fn keeps(self) -> bool {
        self == Turn::Right
    }
}

/// Signed cross product `(p2 - p1) × (p3 - p1)`; positive for a left turn.
#[inline]
pub fn cross(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let ab = p2.to_vec2() - p1.to_vec2();
    let ac = p3.to_vec2() - p1.to_vec2();
    ab.x * ac.y - ab.y * ac.x
}

/// Classify the turn made at `p2`. A NaN cross product counts as `Straight`.
pub fn turn(p1: &Point, p2: &Point, p3: &Point) -> Turn {
    let c = cross(p1, p2, p3);
    if c > 0.0 {
        Turn::Left
    } else if c < 0.0 {
        Turn::Right
    } else {
        Turn::Straight
    }
}

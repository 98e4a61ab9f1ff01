//! Point model: immutable 2D points and the ordered `PointSet`.
//!
//! Invariants
//! - `PointSet` never deduplicates; coincident points survive every operation.
//! - `sort` is stable, so coincident points keep insertion order.
//! - Ids are minted in creation order and never take part in ordering.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use crate::ScanError;

/// 2D point with a creation-order id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    id: usize,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, id: usize) -> Self {
        Self { x, y, id }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
    #[inline]
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Same coordinates, ids ignored.
    #[inline]
    pub fn coincides(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
    /// Canonical order: ascending x, ties by ascending y. NaN sorts after every
    /// number and `-0.0 == 0.0`, which keeps this a total order.
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        match cmp_coord(self.x, other.x) {
            Ordering::Equal => cmp_coord(self.y, other.y),
            o => o,
        }
    }
}

#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered sequence of points.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
    next_id: usize,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new point, minting the next id. Returns the stored point.
    pub fn add_new_point(&mut self, x: f64, y: f64) -> Point {
        let p = Point::new(x, y, self.next_id);
        self.next_id += 1;
        self.points.push(p);
        p
    }

    /// Append an existing point as is. Later minted ids stay above `p.id()`.
    pub fn add_point(&mut self, p: Point) {
        self.next_id = self.next_id.max(p.id + 1);
        self.points.push(p);
    }

    /// Stable sort by (x, y).
    pub fn sort(&mut self) {
        self.points.sort_by(Point::cmp_xy);
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&Point, ScanError> {
        self.points.get(index).ok_or(ScanError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(Point::x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(Point::y).collect()
    }
}

impl FromIterator<(f64, f64)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut ps = PointSet::new();
        for (x, y) in iter {
            ps.add_new_point(x, y);
        }
        ps
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, p) in self.points.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

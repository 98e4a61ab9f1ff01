use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::orient::{cross, Turn};
use crate::rand::{scatter_points, ReplayToken, ScatterCfg};
use crate::view::{present, EdgeLedger};
use crate::HullScanner;

fn set(coords: &[(f64, f64)]) -> PointSet {
    coords.iter().copied().collect()
}

fn xy(hull: &[Point]) -> Vec<(f64, f64)> {
    hull.iter().map(|p| (p.x(), p.y())).collect()
}

fn from_ints(coords: &[(i32, i32)]) -> PointSet {
    coords
        .iter()
        .map(|&(x, y)| (f64::from(x), f64::from(y)))
        .collect()
}

/// Unordered edge multiset of the closed polygon `hull`.
fn polygon_edges(hull: &[Point]) -> BTreeMap<(usize, usize), i32> {
    let mut m = BTreeMap::new();
    if hull.len() < 2 {
        return m;
    }
    for k in 0..hull.len() {
        let (a, b) = (hull[k].id(), hull[(k + 1) % hull.len()].id());
        *m.entry((a.min(b), a.max(b))).or_insert(0) += 1;
    }
    m
}

fn ledger_edges(ledger: &EdgeLedger) -> BTreeMap<(usize, usize), i32> {
    let mut m = BTreeMap::new();
    for (p, q) in ledger.drawn() {
        let (a, b) = (p.id(), q.id());
        *m.entry((a.min(b), a.max(b))).or_insert(0) += 1;
    }
    m
}

fn scan_ledger(points: PointSet) -> EdgeLedger {
    let mut s = HullScanner::new(points);
    let mut ledger = EdgeLedger::new();
    present(&mut ledger, &s.start().unwrap());
    loop {
        let batch = s.step().unwrap();
        present(&mut ledger, &batch);
        if batch.iter().any(|e| e.is_terminal()) {
            break;
        }
    }
    ledger
}

fn assert_is_hull_of(hull: &[Point], points: &PointSet) {
    for k in 0..hull.len() {
        let a = &hull[k];
        let b = &hull[(k + 1) % hull.len()];
        for p in points {
            assert!(
                cross(a, b, p) <= 0.0,
                "{p} lies outside hull edge {a} -> {b}"
            );
        }
    }
    for (i, a) in hull.iter().enumerate() {
        for b in &hull[i + 1..] {
            assert!(!a.coincides(b), "repeated vertex {a}");
        }
    }
}

#[test]
fn square_with_centre_excludes_interior() {
    let ps = set(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    let hull = compute_hull(&ps);
    assert_eq!(xy(&hull), [(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
}

#[test]
fn three_collinear_give_endpoints() {
    let hull = compute_hull(&set(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]));
    assert_eq!(xy(&hull), [(1.0, 1.0), (3.0, 3.0)]);
}

#[test]
fn many_collinear_give_extremes() {
    let ps = set(&[(3.0, 6.0), (0.0, 0.0), (2.0, 4.0), (1.0, 2.0), (5.0, 10.0), (4.0, 8.0)]);
    assert_eq!(xy(&compute_hull(&ps)), [(0.0, 0.0), (5.0, 10.0)]);
    let vertical = set(&[(2.0, 3.0), (2.0, -1.0), (2.0, 7.0), (2.0, 0.0)]);
    assert_eq!(xy(&compute_hull(&vertical)), [(2.0, -1.0), (2.0, 7.0)]);
}

#[test]
fn degenerate_sizes() {
    assert!(compute_hull(&PointSet::new()).is_empty());
    assert_eq!(xy(&compute_hull(&set(&[(5.0, -2.0)]))), [(5.0, -2.0)]);
    assert_eq!(
        xy(&compute_hull(&set(&[(3.0, 1.0), (-1.0, 2.0)]))),
        [(-1.0, 2.0), (3.0, 1.0)]
    );
    let same = set(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert_eq!(xy(&compute_hull(&same)), [(1.0, 1.0)]);
}

#[test]
fn triangle_is_clockwise_from_leftmost() {
    let hull = compute_hull(&set(&[(1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]));
    assert_eq!(xy(&hull), [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
    assert_eq!(turn(&hull[0], &hull[1], &hull[2]), Turn::Right);
}

#[test]
fn duplicates_and_edge_midpoints_are_dropped() {
    let ps = set(&[
        (0.0, 0.0),
        (0.0, 2.0),
        (1.0, 1.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 0.0),
        (1.0, 2.0),
        (2.0, 1.0),
        (2.0, 2.0),
    ]);
    let hull = compute_hull(&ps);
    assert_eq!(xy(&hull), [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
}

#[test]
fn leftmost_tie_breaks_by_min_y() {
    let ps = set(&[(0.0, 3.0), (0.0, -3.0), (4.0, 0.0), (-0.0, 1.0)]);
    let hull = compute_hull(&ps);
    assert_eq!(xy(&hull)[0], (0.0, -3.0));
}

#[test]
fn chains_split_at_extremes() {
    let ps = set(&[
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 2.0),
        (4.0, 4.0),
        (5.0, 5.0),
        (6.0, 8.0),
    ]);
    let mut sorted = ps.as_slice().to_vec();
    sorted.sort_by(Point::cmp_xy);
    assert_eq!(
        xy(&lower_chain(&sorted)),
        [(6.0, 8.0), (5.0, 5.0), (3.0, 0.0), (0.0, 0.0)]
    );
    assert_eq!(xy(&upper_chain(&sorted)), [(0.0, 0.0), (0.0, 1.0), (6.0, 8.0)]);
}

#[test]
fn input_is_left_untouched_and_result_is_stable() {
    let ps = set(&[(3.0, 1.0), (0.0, 0.0), (1.0, 4.0), (2.0, -2.0)]);
    let before = ps.as_slice().to_vec();
    let first = compute_hull(&ps);
    let second = compute_hull(&ps);
    assert_eq!(ps.as_slice(), before.as_slice());
    assert_eq!(first, second);
}

#[test]
fn seeded_scatter_matches_scanner() {
    let cfg = ScatterCfg {
        count: 300,
        snap: Some(10.0),
        ..ScatterCfg::default()
    };
    for index in 0..8 {
        let ps = scatter_points(cfg, ReplayToken { seed: 2024, index });
        let hull = compute_hull(&ps);
        assert_is_hull_of(&hull, &ps);

        let mut s = HullScanner::new(ps);
        s.start().unwrap();
        s.run_to_completion().unwrap();
        let lower = s.stack().to_vec();
        // The lower chain ends where the hull starts.
        assert!(lower.last().unwrap().coincides(&hull[0]));
    }
}

fn int_points(max: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-12i32..12, -12i32..12), 0..max)
}

fn distinct_points(min: usize, max: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::btree_set((-12i32..12, -12i32..12), min..max)
        .prop_map(|s| s.into_iter().collect())
}

proptest! {
    #[test]
    fn hull_contains_every_point(coords in int_points(40)) {
        let ps = from_ints(&coords);
        let hull = compute_hull(&ps);
        assert_is_hull_of(&hull, &ps);
        if hull.len() >= 3 {
            for k in 0..hull.len() {
                let prev = &hull[(k + hull.len() - 1) % hull.len()];
                let next = &hull[(k + 1) % hull.len()];
                prop_assert_eq!(turn(prev, &hull[k], next), Turn::Right);
            }
        }
    }

    #[test]
    fn hull_ignores_input_order(coords in int_points(40), shift in 0usize..40) {
        let base = xy(&compute_hull(&from_ints(&coords)));
        let mut reversed = coords.clone();
        reversed.reverse();
        prop_assert_eq!(&base, &xy(&compute_hull(&from_ints(&reversed))));
        let mut rotated = coords.clone();
        if !rotated.is_empty() {
            let k = shift % rotated.len();
            rotated.rotate_left(k);
        }
        prop_assert_eq!(&base, &xy(&compute_hull(&from_ints(&rotated))));
    }

    #[test]
    fn hull_starts_at_leftmost(coords in int_points(40)) {
        let ps = from_ints(&coords);
        let hull = compute_hull(&ps);
        if let Some(min) = ps.iter().min_by(|a, b| a.cmp_xy(b)) {
            prop_assert!(hull[0].coincides(min));
        } else {
            prop_assert!(hull.is_empty());
        }
    }

    #[test]
    fn scanner_edges_equal_hull_edges(coords in distinct_points(2, 40)) {
        let ps = from_ints(&coords);
        let hull = compute_hull(&ps);
        let ledger = scan_ledger(ps);
        prop_assert!(ledger.is_complete());
        prop_assert_eq!(ledger_edges(&ledger), polygon_edges(&hull));
    }
}

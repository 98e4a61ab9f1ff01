//! Reproducible random point sets.
//!
//! Purpose
//! - Feed benches, stress checks and the CLI with point sets that can be
//!   regenerated from a `(seed, index)` replay token.
//!
//! Model
//! - Points are uniform in an axis-aligned box `center ± half_extent`.
//! - With `snap` set, coordinates are rounded to multiples of it, which makes
//!   duplicates and collinear runs common (useful for edge-case coverage).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::PointSet;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Same seed, next index.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub center: Vector2<f64>,
    /// Half width and half height of the sampling box. Negative entries are mirrored.
    pub half_extent: Vector2<f64>,
    /// Grid spacing for coordinate rounding; `None` or non-positive disables it.
    pub snap: Option<f64>,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 32,
            center: Vector2::new(300.0, 200.0),
            half_extent: Vector2::new(280.0, 180.0),
            snap: None,
        }
    }
}

/// Draw `cfg.count` points. Ids follow draw order.
pub fn scatter_points(cfg: ScatterCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs();
    let snap = cfg.snap.filter(|s| s.is_finite() && *s > 0.0);
    let mut ps = PointSet::new();
    for _ in 0..cfg.count {
        let u = Vector2::new(rng.gen::<f64>() * 2.0 - 1.0, rng.gen::<f64>() * 2.0 - 1.0);
        let mut p = cfg.center + h.component_mul(&u);
        if let Some(s) = snap {
            p = p.map(|c| (c / s).round() * s);
        }
        ps.add_new_point(p.x, p.y);
    }
    ps
}

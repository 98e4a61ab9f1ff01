//! Stepwise monotone-chain convex hull.
//!
//! The crate splits into a pure part and a stepping part:
//! - `point`, `orient`, `hull`: point model, turn predicate, and the one-shot
//!   `compute_hull`.
//! - `scan`: `HullScanner`, which exposes the same algorithm one elementary
//!   operation at a time as a stream of `StepEvent` batches.
//! - `anim`, `view`: the seams an outer driver plugs into (cancellable
//!   auto-play ticker, event consumers). Nothing here renders or sleeps.
//!
//! Conventions
//! - y axis points up; "clockwise" and "right turn" follow the usual math
//!   orientation.
//! - A `HullScanner` is single-owner: every mutating call takes `&mut self`,
//!   and it must not be shared across threads without external locking.

pub mod anim;
pub mod error;
pub mod hull;
pub mod orient;
pub mod point;
pub mod rand;
pub mod scan;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ScanError;
pub use hull::compute_hull;
pub use orient::{turn, Turn};
pub use point::{Point, PointSet};
pub use scan::{HullScanner, Phase, StepEvent};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::anim::{AnimationCfg, Animator, StopHandle};
    pub use crate::hull::{compute_hull, lower_chain, upper_chain};
    pub use crate::orient::{cross, turn, Turn};
    pub use crate::point::{Point, PointSet};
    pub use crate::rand::{scatter_points, ReplayToken, ScatterCfg};
    pub use crate::scan::{HullScanner, Phase, StepEvent};
    pub use crate::view::{present, EdgeLedger, TraceViewer, Viewer};
    pub use crate::ScanError;
    pub use nalgebra::Vector2 as Vec2;
}

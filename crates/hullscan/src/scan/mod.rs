//! Stepwise hull construction.
//!
//! Purpose
//! - Expose the monotone-chain scan one elementary operation per `step()` so
//!   a viewer can draw each added edge and highlight each rejected one.
//! - Produce exactly the polygon `hull::compute_hull` returns: both share the
//!   `Turn::keeps` policy.
//!
//! Code cross-refs: `orient::turn`, `hull::{upper_chain, lower_chain}`,
//! `anim::Animator` (timed driver), `view::Viewer` (event consumer).

mod machine;
mod types;

pub use machine::HullScanner;
pub use types::{Phase, StepEvent};

//! Event and phase types emitted by the scanner.

use std::fmt;

use crate::Point;

/// Which chain the scanner is building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Upper,
    Lower,
    Done,
}

/// One observable effect of an elementary operation.
///
/// A single `step()` may produce several events; they are always ordered
/// rejects first, then the add that follows them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepEvent {
    /// Edge `(from, to)` joined the chain.
    EdgeAdded(Point, Point),
    /// Edge `(from, to)` left the chain because `to` was popped.
    EdgeRejected(Point, Point),
    /// The scanner switched chains.
    PhaseTransition(Phase),
    /// The lower chain is finished; further steps are no-ops.
    Completed,
    /// `step()` was called after `Completed`.
    AlreadyDone,
}

impl StepEvent {
    /// `Completed` or `AlreadyDone`: a driver can stop polling.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepEvent::Completed | StepEvent::AlreadyDone)
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeAdded(a, b) => write!(f, "add {a} -> {b}"),
            Self::EdgeRejected(a, b) => write!(f, "reject {a} -> {b}"),
            Self::PhaseTransition(phase) => write!(f, "phase {phase:?}"),
            Self::Completed => write!(f, "completed"),
            Self::AlreadyDone => write!(f, "already done"),
        }
    }
}

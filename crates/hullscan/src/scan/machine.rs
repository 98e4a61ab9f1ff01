//! `HullScanner`: the monotone-chain scan as an explicit state machine.
//!
//! Model
//! - `start` sorts the owned points and seeds the upper chain with the first
//!   two of them.
//! - Each `step` admits at most one candidate: it pops every chain point that
//!   would not make a strict right turn towards the candidate, then pushes it.
//! - When the upper chain runs out of candidates the points are reversed in
//!   place and the lower chain is built the same way.
//!
//! Invariant (between calls): any three consecutive stack entries make a
//! strict right turn.

use tracing::{debug, trace};

use super::types::{Phase, StepEvent};
use crate::orient::turn;
use crate::{Point, PointSet, ScanError};

#[derive(Clone, Debug)]
struct ScanState {
    phase: Phase,
    stack: Vec<Point>,
    cursor: usize,
}

impl ScanState {
    /// Fresh chain seeded with the first two points of `points`.
    fn seeded(points: &PointSet, phase: Phase) -> Result<(Self, Point, Point), ScanError> {
        if points.len() < 2 {
            return Err(ScanError::InsufficientPoints {
                found: points.len(),
            });
        }
        let p0 = *points.at(0)?;
        let p1 = *points.at(1)?;
        let state = Self {
            phase,
            stack: vec![p0, p1],
            cursor: 2,
        };
        Ok((state, p0, p1))
    }

    fn chain_is_convex(&self) -> bool {
        self.stack
            .windows(3)
            .all(|w| turn(&w[0], &w[1], &w[2]).keeps())
    }
}

/// Stepping hull builder over an owned `PointSet`.
///
/// Single-owner: not meant to be driven from several threads at once. Hand it
/// to one driver (`&mut`) at a time.
#[derive(Clone, Debug, Default)]
pub struct HullScanner {
    points: PointSet,
    state: Option<ScanState>,
}

impl HullScanner {
    pub fn new(points: PointSet) -> Self {
        Self {
            points,
            state: None,
        }
    }

    /// Points in their current scan order (sorted after `start`, reversed
    /// during the lower phase).
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn into_points(self) -> PointSet {
        self.points
    }

    /// Append a point. Any scan in progress is dropped; call `start` again.
    pub fn add_new_point(&mut self, x: f64, y: f64) -> Point {
        self.state = None;
        self.points.add_new_point(x, y)
    }

    /// Append an existing point. Any scan in progress is dropped.
    pub fn add_point(&mut self, p: Point) {
        self.state = None;
        self.points.add_point(p);
    }

    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(|s| s.phase)
    }

    /// Chain in progress; empty before `start`.
    pub fn stack(&self) -> &[Point] {
        self.state
            .as_ref()
            .map(|s| s.stack.as_slice())
            .unwrap_or(&[])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.cursor)
    }

    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.phase() == Some(Phase::Done)
    }

    /// Sort the points and seed the upper chain. Restarts any previous run.
    pub fn start(&mut self) -> Result<Vec<StepEvent>, ScanError> {
        self.state = None;
        self.points.sort();
        let (state, p0, p1) = ScanState::seeded(&self.points, Phase::Upper)?;
        debug!(points = self.points.len(), "scan started");
        self.state = Some(state);
        Ok(vec![StepEvent::EdgeAdded(p0, p1)])
    }

    /// Perform one elementary operation and return its events in order.
    pub fn step(&mut self) -> Result<Vec<StepEvent>, ScanError> {
        let state = self.state.as_mut().ok_or(ScanError::NotStarted)?;
        if state.phase == Phase::Done {
            return Ok(vec![StepEvent::AlreadyDone]);
        }

        if state.cursor >= self.points.len() {
            return match state.phase {
                Phase::Upper => {
                    self.points.reverse();
                    let (lower, p0, p1) = ScanState::seeded(&self.points, Phase::Lower)?;
                    *state = lower;
                    debug!("upper chain finished, scanning lower chain");
                    Ok(vec![
                        StepEvent::PhaseTransition(Phase::Lower),
                        StepEvent::EdgeAdded(p0, p1),
                    ])
                }
                _ => {
                    state.phase = Phase::Done;
                    debug!("lower chain finished");
                    Ok(vec![StepEvent::Completed])
                }
            };
        }

        let candidate = *self.points.at(state.cursor)?;
        let mut events = Vec::new();
        while let [.., a, b] = state.stack[..] {
            if turn(&a, &b, &candidate).keeps() {
                break;
            }
            state.stack.pop();
            trace!(%a, %b, "edge rejected");
            events.push(StepEvent::EdgeRejected(a, b));
        }
        if let Some(&top) = state.stack.last() {
            events.push(StepEvent::EdgeAdded(top, candidate));
        }
        trace!(%candidate, rejected = events.len().saturating_sub(1), "candidate admitted");
        state.stack.push(candidate);
        state.cursor += 1;
        debug_assert!(state.chain_is_convex());
        Ok(events)
    }

    /// Step until `Completed` and return every event in order.
    pub fn run_to_completion(&mut self) -> Result<Vec<StepEvent>, ScanError> {
        let mut events = Vec::new();
        loop {
            let batch = self.step()?;
            let done = batch.iter().any(StepEvent::is_terminal);
            events.extend(batch);
            if done {
                return Ok(events);
            }
        }
    }
}

//! Event consumers.
//!
//! The scanner never draws. Anything that renders, records, or logs a scan
//! implements `Viewer` and is fed through `present`, one step batch at a time.

use tracing::info;

use crate::scan::{Phase, StepEvent};
use crate::Point;

/// Receiver for scanner events.
pub trait Viewer {
    /// Called before each step batch. Highlights from the previous step expire here.
    fn begin_step(&mut self) {}

    fn on_event(&mut self, event: &StepEvent);

    /// Called when a scan (re)starts; drop everything drawn so far.
    fn reset(&mut self) {}
}

/// Feed one step batch to `viewer`.
pub fn present<V: Viewer + ?Sized>(viewer: &mut V, events: &[StepEvent]) {
    viewer.begin_step();
    for e in events {
        viewer.on_event(e);
    }
}

impl Viewer for Vec<StepEvent> {
    fn on_event(&mut self, event: &StepEvent) {
        self.push(*event);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// Tracks which edges are currently drawn and which were rejected in the
/// latest step, the way a canvas adapter would.
#[derive(Clone, Debug, Default)]
pub struct EdgeLedger {
    drawn: Vec<(Point, Point)>,
    highlighted: Vec<(Point, Point)>,
    phase: Option<Phase>,
    complete: bool,
}

impl EdgeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible edges in draw order.
    pub fn drawn(&self) -> &[(Point, Point)] {
        &self.drawn
    }

    /// Edges rejected during the most recent step.
    pub fn highlighted(&self) -> &[(Point, Point)] {
        &self.highlighted
    }

    /// Last phase announced, `None` while on the upper chain.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Viewer for EdgeLedger {
    fn begin_step(&mut self) {
        self.highlighted.clear();
    }

    fn on_event(&mut self, event: &StepEvent) {
        match *event {
            StepEvent::EdgeAdded(a, b) => self.drawn.push((a, b)),
            StepEvent::EdgeRejected(a, b) => {
                let hit = self
                    .drawn
                    .iter()
                    .rposition(|(p, q)| p.id() == a.id() && q.id() == b.id());
                if let Some(k) = hit {
                    self.drawn.remove(k);
                }
                self.highlighted.push((a, b));
            }
            StepEvent::PhaseTransition(phase) => self.phase = Some(phase),
            StepEvent::Completed => self.complete = true,
            StepEvent::AlreadyDone => {}
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Logs every event at info level.
#[derive(Clone, Debug, Default)]
pub struct TraceViewer {
    steps: usize,
}

impl TraceViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step batches seen since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Viewer for TraceViewer {
    fn begin_step(&mut self) {
        self.steps += 1;
    }

    fn on_event(&mut self, event: &StepEvent) {
        info!(step = self.steps, %event, "scan");
    }

    fn reset(&mut self) {
        self.steps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HullScanner, PointSet};

    #[test]
    fn ledger_highlights_expire_next_step() {
        let ps: PointSet = [(0.0, 0.0), (1.0, 3.0), (2.0, 4.0), (3.0, 10.0)]
            .into_iter()
            .collect();
        let mut s = HullScanner::new(ps);
        let mut ledger = EdgeLedger::new();
        present(&mut ledger, &s.start().unwrap());
        present(&mut ledger, &s.step().unwrap());
        assert_eq!(ledger.drawn().len(), 2);

        present(&mut ledger, &s.step().unwrap());
        assert_eq!(ledger.highlighted().len(), 2);
        let drawn: Vec<_> = ledger.drawn().iter().map(|(a, b)| (a.id(), b.id())).collect();
        assert_eq!(drawn, [(0, 3)]);

        present(&mut ledger, &s.step().unwrap());
        assert!(ledger.highlighted().is_empty());
        assert_eq!(ledger.phase(), Some(Phase::Lower));
    }

    #[test]
    fn ledger_reset_and_completion() {
        let ps: PointSet = [(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)].into_iter().collect();
        let mut s = HullScanner::new(ps);
        let mut ledger = EdgeLedger::new();
        present(&mut ledger, &s.start().unwrap());
        present(&mut ledger, &s.run_to_completion().unwrap());
        assert!(ledger.is_complete());
        assert_eq!(ledger.drawn().len(), 3);
        ledger.reset();
        assert!(ledger.drawn().is_empty() && !ledger.is_complete());
    }

    #[test]
    fn vec_viewer_records_and_trace_viewer_counts() {
        let ps: PointSet = [(0.0, 0.0), (1.0, 0.0)].into_iter().collect();
        let mut s = HullScanner::new(ps);
        let mut log: Vec<StepEvent> = Vec::new();
        let mut trace = TraceViewer::new();
        for batch in [s.start().unwrap(), s.step().unwrap(), s.step().unwrap()] {
            present(&mut log, &batch);
            present(&mut trace, &batch);
        }
        assert_eq!(log.len(), 4);
        assert_eq!(log.last(), Some(&StepEvent::Completed));
        assert_eq!(trace.steps(), 3);
        Viewer::reset(&mut log);
        assert!(log.is_empty());
    }
}

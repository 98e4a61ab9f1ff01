//! Auto-play ticker state for an external timed driver.
//!
//! The core holds no timer. A driver owns one `Animator` per scanner, sleeps
//! `interval()` between calls to `tick`, and stops polling once `is_running`
//! turns false. `play` is idempotent (one driver, never two stacked), and
//! `stop` or any `StopHandle` clone cancels between two steps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::{HullScanner, ScanError, StepEvent};

/// Auto-play configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationCfg {
    /// Delay between automatic `step()` calls, in milliseconds.
    pub interval_ms: u64,
}

impl Default for AnimationCfg {
    fn default() -> Self {
        Self { interval_ms: 600 }
    }
}

/// Cloneable cancellation signal for a running animation.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Play/stop state of one auto-play driver.
#[derive(Debug, Default)]
pub struct Animator {
    cfg: AnimationCfg,
    running: StopHandle,
}

impl Animator {
    pub fn new(cfg: AnimationCfg) -> Self {
        Self {
            cfg,
            running: StopHandle::default(),
        }
    }

    pub fn cfg(&self) -> AnimationCfg {
        self.cfg
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.cfg.interval_ms)
    }

    /// Start playing. Returns `false` (and changes nothing) when already playing.
    pub fn play(&mut self) -> bool {
        let started = self
            .running
            .0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if started {
            debug!(interval_ms = self.cfg.interval_ms, "animation started");
        }
        started
    }

    pub fn stop(&self) {
        if self.running.is_running() {
            debug!("animation stopped");
        }
        self.running.stop();
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    /// Handle that stops this animator from elsewhere (e.g. another thread).
    pub fn stop_handle(&self) -> StopHandle {
        self.running.clone()
    }

    /// One auto-play tick: a single `step()` while playing, nothing otherwise.
    ///
    /// Stops itself after a terminal event or an error, so the driver can
    /// keep looping on `is_running`.
    pub fn tick(&mut self, scanner: &mut HullScanner) -> Result<Vec<StepEvent>, ScanError> {
        if !self.is_running() {
            return Ok(Vec::new());
        }
        match scanner.step() {
            Ok(events) => {
                if events.iter().any(StepEvent::is_terminal) {
                    self.stop();
                }
                Ok(events)
            }
            Err(e) => {
                self.stop();
                Err(e)
            }
        }
    }
}

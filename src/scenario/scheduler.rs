//! Scheduler collaborator boundary.

use std::time::{Duration, Instant};

/// The real-time scheduler surface the harness depends on: a monotonic
/// millisecond tick counter and a delay/yield primitive.
///
/// The solver never calls these inside its cost or refinement loops; they
/// are touched only at scenario boundaries.
pub trait Scheduler {
    /// Monotonic tick count, milliseconds.
    fn ticks(&self) -> u64;

    /// Yields the processor for at least `duration`.
    fn delay(&self, duration: Duration);
}

/// Host-side scheduler backed by [`Instant`] and [`std::thread::sleep`].
pub struct StdScheduler {
    epoch: Instant,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for StdScheduler {
    fn ticks(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn delay(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

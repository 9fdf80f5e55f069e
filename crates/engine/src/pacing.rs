//! Frame pacing: enforce a minimum wall-clock duration per frame.

use std::thread;
use std::time::{Duration, Instant};

use crate::types::FRAME_FLOOR_MS;

#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    floor: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_FLOOR_MS))
    }
}

impl FramePacer {
    pub fn new(floor: Duration) -> Self {
        Self { floor }
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    /// Time still to wait after a frame whose work took `elapsed`.
    ///
    /// - `elapsed < floor`: the remainder
    /// - otherwise: None (the frame already used its budget)
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.floor.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep until at least `floor` has passed since `started`.
    pub fn finish(&self, started: Instant) {
        if let Some(wait) = self.remaining(started.elapsed()) {
            thread::sleep(wait);
        }
    }
}

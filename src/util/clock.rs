//! Time sources for the frame loop.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Supplies absolute time in milliseconds.
///
/// Transitions compute progress from absolute elapsed time, so any
/// monotonic source works regardless of frame pacing.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Synthetic clock driven by hand.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock reading 0 ms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time.
    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    /// Move forward by `delta_ms`.
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

//! Fixed-interval timer driven by elapsed milliseconds.
//!
//! The core never reads a clock. Front-ends feed real elapsed time and the
//! simulator feeds simulated time; both get the same firing behaviour.

/// Accumulates elapsed time and reports how many intervals have completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u64,
    elapsed_ms: u64,
}

impl IntervalTimer {
    /// `interval_ms` must be non-zero.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Add elapsed time. Returns the number of times the timer fired.
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.elapsed_ms += ms;
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired
    }

    /// Milliseconds until the next firing.
    pub fn remaining_ms(&self) -> u64 {
        self.interval_ms - self.elapsed_ms
    }
}

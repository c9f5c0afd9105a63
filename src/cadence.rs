//! Drift compensation for the one-second update loop.
//!
//! After each iteration the scheduler samples the sub-second part of the
//! wall clock. The absolute change of that sample since the previous one,
//! in microseconds, is averaged into a running jitter estimate, and the loop
//! sleeps one second minus the estimate. Only the sub-second component is
//! compared, never the full elapsed time.

use std::time::Duration;

/// Loop period in microseconds.
pub const PERIOD_US: i64 = 1_000_000;
/// Jitter estimate before the first sample, in microseconds.
pub const INITIAL_JITTER_US: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    jitter_us: i64,
    previous_nanos: u32,
}

impl Cadence {
    /// `start_nanos` is the sub-second nanosecond component at loop start.
    pub fn new(start_nanos: u32) -> Self {
        Self {
            jitter_us: INITIAL_JITTER_US,
            previous_nanos: start_nanos,
        }
    }

    pub fn jitter_us(&self) -> i64 {
        self.jitter_us
    }

    /// Fold a new sample into the estimate and return the sleep before the
    /// next iteration.
    pub fn next_sleep(&mut self, now_nanos: u32) -> Duration {
        let raw = ((now_nanos as i64 - self.previous_nanos as i64) / 1000).abs();
        self.jitter_us = (raw + self.jitter_us) / 2;
        self.previous_nanos = now_nanos;
        Duration::from_micros((PERIOD_US - self.jitter_us).max(0) as u64)
    }
}

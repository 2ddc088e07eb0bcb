//! Monotonic time adapter.
//!
//! Millisecond timestamps for the debounce filters, measured from adapter
//! construction with `std::time::Instant`.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since construction, truncated to `u32` (wraps after
    /// ~49 days; consumers use `wrapping_sub`).
    pub fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

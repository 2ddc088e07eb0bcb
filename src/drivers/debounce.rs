//! Per-signal debounce filter.
//!
//! Turns a stream of raw samples into confirmed level changes. A new level
//! is confirmed only after the raw line has held it, without reversal, for
//! at least the debounce window. Any reversal restarts the window, so a
//! bounce shorter than the window is never reported.
//!
//! ```text
//!  raw      ─┐ ┌─┐ ┌────────────────────
//!            └─┘ └─┘
//!  candidate  ^   ^  ^ (re-armed on every raw change)
//!  confirmed ─────────────────┐ window elapsed since last re-arm
//!                             └──────────
//! ```
//!
//! Timestamps are monotonic milliseconds truncated to `u32`; all arithmetic
//! is `wrapping_sub`, so the filter survives the 49-day wrap.

use crate::app::signal::{ConfirmedEdge, Level, Signal};

/// Default stabilisation window.
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

#[derive(Debug, Clone)]
pub struct DebounceFilter {
    signal: Signal,
    window_ms: u32,
    confirmed: Level,
    last_raw: Level,
    candidate_since_ms: u32,
    last_edge_ms: Option<u32>,
}

impl DebounceFilter {
    /// `initial` seeds both the confirmed and last raw level, so a line
    /// already held at startup is not reported as an edge.
    pub fn new(signal: Signal, window_ms: u32, initial: Level) -> Self {
        Self {
            signal,
            window_ms,
            confirmed: initial,
            last_raw: initial,
            candidate_since_ms: 0,
            last_edge_ms: None,
        }
    }

    /// Feed one raw sample taken at `now_ms`.
    /// Returns the confirmed edge, if this sample completes one.
    pub fn observe(&mut self, raw: Level, now_ms: u32) -> Option<ConfirmedEdge> {
        if raw == self.confirmed {
            // Back at the confirmed level: drop any pending candidate.
            self.last_raw = raw;
            return None;
        }

        if raw != self.last_raw {
            self.last_raw = raw;
            self.candidate_since_ms = now_ms;
            return None;
        }

        if now_ms.wrapping_sub(self.candidate_since_ms) < self.window_ms {
            return None;
        }

        self.confirmed = raw;
        self.last_edge_ms = Some(now_ms);
        Some(ConfirmedEdge {
            signal: self.signal,
            level: raw,
            timestamp_ms: now_ms,
        })
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Last confirmed logical level.
    pub fn level(&self) -> Level {
        self.confirmed
    }

    /// Timestamp of the last confirmed transition, if any.
    pub fn last_edge_ms(&self) -> Option<u32> {
        self.last_edge_ms
    }
}

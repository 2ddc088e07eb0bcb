//! Periodic input sampling.
//!
//! Once per tick the poller reads every monitored pin, runs the sample
//! through that signal's [`DebounceFilter`] and collects confirmed edges in
//! the fixed [`Signal::ALL`] priority order.
//!
//! A failed read only affects its own signal for that tick: the error is
//! logged, the filter is left untouched, and the remaining signals are
//! still sampled. Without a pin source the poller produces no edges.

use heapless::Vec;
use log::{debug, info, warn};

use crate::app::controller::StateController;
use crate::app::ports::{AudioSink, DisplaySink, PinMode, Pull, RawPinSource};
use crate::app::signal::{ConfirmedEdge, Level, SIGNAL_COUNT, Signal, SignalTable};
use crate::config::DashboardConfig;
use crate::drivers::debounce::DebounceFilter;
use crate::error::PinError;

/// Edges confirmed in a single poll (at most one per signal).
pub type EdgeBatch = Vec<ConfirmedEdge, SIGNAL_COUNT>;

struct Channel {
    pin: u8,
    filter: DebounceFilter,
    /// Set while reads keep failing, so the log is not flooded every tick.
    failing: bool,
}

pub struct InputPoller<P> {
    source: Option<P>,
    channels: [Channel; SIGNAL_COUNT],
    read_failures: u64,
}

impl<P: RawPinSource> InputPoller<P> {
    /// Configure every pin as a pulled-down input and seed each filter with
    /// the level currently on the line.
    pub fn new(
        mut source: Option<P>,
        pins: &SignalTable<u8>,
        debounce_ms: &SignalTable<u32>,
    ) -> Self {
        if source.is_none() {
            warn!("No pin source: running without GPIO input");
        }

        let channels = Signal::ALL.map(|signal| {
            let pin = pins.get(signal);
            let initial = match source.as_mut() {
                Some(src) => setup_pin(src, signal, pin).unwrap_or_else(|e| {
                    warn!("{} (GPIO {}) setup failed: {}", signal, pin, e);
                    Level::Low
                }),
                None => Level::Low,
            };
            Channel {
                pin,
                filter: DebounceFilter::new(signal, debounce_ms.get(signal), initial),
                failing: false,
            }
        });

        Self {
            source,
            channels,
            read_failures: 0,
        }
    }

    pub fn from_config(source: Option<P>, config: &DashboardConfig) -> Self {
        Self::new(source, &config.pins, &config.debounce_ms)
    }

    /// Sample every signal once at `now_ms`.
    pub fn poll(&mut self, now_ms: u32) -> EdgeBatch {
        let mut edges = EdgeBatch::new();
        let Some(source) = self.source.as_mut() else {
            return edges;
        };

        for ch in &mut self.channels {
            match source.read(ch.pin) {
                Ok(raw) => {
                    if ch.failing {
                        ch.failing = false;
                        info!("{} (GPIO {}) readable again", ch.filter.signal(), ch.pin);
                    }
                    if let Some(edge) = ch.filter.observe(raw, now_ms) {
                        // At most one edge per channel per poll.
                        let pushed = edges.push(edge).is_ok();
                        debug_assert!(pushed, "edge batch smaller than channel count");
                    }
                }
                Err(e) => {
                    self.read_failures += 1;
                    if !ch.failing {
                        ch.failing = true;
                        warn!(
                            "{} (GPIO {}) read error: {}, skipping",
                            ch.filter.signal(),
                            ch.pin,
                            e
                        );
                    }
                }
            }
        }

        edges
    }

    /// Poll once and forward every confirmed edge to `controller`.
    /// Returns the number of edges applied.
    pub fn tick<D: DisplaySink, A: AudioSink>(
        &mut self,
        now_ms: u32,
        controller: &StateController<D, A>,
    ) -> usize {
        let edges = self.poll(now_ms);
        let applied = edges.len();
        controller.apply_all(edges);
        applied
    }

    /// Whether a pin source is attached.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Debounced level of `signal`.
    pub fn level(&self, signal: Signal) -> Level {
        self.channels[signal.index()].filter.level()
    }

    /// Total failed reads since construction.
    pub fn read_failures(&self) -> u64 {
        self.read_failures
    }
}

fn setup_pin<P: RawPinSource>(src: &mut P, signal: Signal, pin: u8) -> Result<Level, PinError> {
    src.set_mode(pin, PinMode::Input)?;
    src.set_pull_up_down(pin, Pull::Down)?;
    let level = src.read(pin)?;
    debug!("{} on GPIO {} starts {:?}", signal, pin, level);
    Ok(level)
}

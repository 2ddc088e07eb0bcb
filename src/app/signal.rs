//! Monitored input signals and the edges they produce.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of monitored signals.
pub const SIGNAL_COUNT: usize = 5;

/// One monitored logical input.
///
/// Discriminant order is the fixed per-tick priority: when several signals
/// confirm an edge in the same poll, they are applied in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Signal {
    Accelerator = 0,
    Brake = 1,
    Horn = 2,
    LeftIndicator = 3,
    RightIndicator = 4,
}

impl Signal {
    /// Every signal, in application priority order.
    pub const ALL: [Signal; SIGNAL_COUNT] = [
        Signal::Accelerator,
        Signal::Brake,
        Signal::Horn,
        Signal::LeftIndicator,
        Signal::RightIndicator,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerator => "Accelerator",
            Self::Brake => "Brake",
            Self::Horn => "Horn",
            Self::LeftIndicator => "Left indicator",
            Self::RightIndicator => "Right indicator",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampled logic level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.is_high() as u8
    }
}

/// A debounce-validated transition of a signal's logical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedEdge {
    pub signal: Signal,
    pub level: Level,
    /// Monotonic milliseconds at which the edge was confirmed.
    pub timestamp_ms: u32,
}

/// One value per [`Signal`], serialised with named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTable<T> {
    pub accelerator: T,
    pub brake: T,
    pub horn: T,
    pub left_indicator: T,
    pub right_indicator: T,
}

impl<T: Copy> SignalTable<T> {
    /// The same value for every signal.
    pub const fn uniform(value: T) -> Self {
        Self {
            accelerator: value,
            brake: value,
            horn: value,
            left_indicator: value,
            right_indicator: value,
        }
    }

    pub fn get(&self, signal: Signal) -> T {
        match signal {
            Signal::Accelerator => self.accelerator,
            Signal::Brake => self.brake,
            Signal::Horn => self.horn,
            Signal::LeftIndicator => self.left_indicator,
            Signal::RightIndicator => self.right_indicator,
        }
    }

    /// `(signal, value)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Signal, T)> + '_ {
        Signal::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   RawPinSource ──▶ InputPoller ──▶ StateController ──▶ DisplaySink / AudioSink
//!                                    BatterySimulator ──▶ DisplaySink
//! ```
//!
//! Driven adapters (pin transports, renderers, sound players, config
//! storage) implement these traits. The domain core consumes them via
//! generics and never touches hardware directly.

use crate::app::signal::Level;
use crate::app::state::VehicleState;
use crate::config::DashboardConfig;
use crate::error::PinError;

// ───────────────────────────────────────────────────────────────
// Pin source port (driven adapter: GPIO transport → domain)
// ───────────────────────────────────────────────────────────────

/// Direction of a GPIO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Internal bias resistor of a GPIO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Off,
    Down,
    Up,
}

/// Raw digital pin access. Implementations should bound read latency and
/// report a slow read as [`PinError::Timeout`].
pub trait RawPinSource {
    /// Sample the current level of `pin`.
    fn read(&mut self, pin: u8) -> Result<Level, PinError>;

    /// Configure the direction of `pin`.
    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), PinError>;

    /// Configure the bias resistor of `pin`.
    fn set_pull_up_down(&mut self, pin: u8, pull: Pull) -> Result<(), PinError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → gauges and lamps)
// ───────────────────────────────────────────────────────────────

/// Presentation sink for the dashboard. Calls arrive synchronously, in the
/// order the state changes were produced.
pub trait DisplaySink {
    /// Maximum value of the speedometer scale. Applied once at startup.
    fn set_speed_range(&mut self, max_speed: u16);

    fn set_accelerator(&mut self, active: bool);

    fn set_brake(&mut self, active: bool);

    fn set_horn(&mut self, active: bool);

    fn set_left_indicator(&mut self, on: bool);

    fn set_right_indicator(&mut self, on: bool);

    /// Battery gauge, 0–100.
    fn set_battery_level(&mut self, percent: u8);

    /// Charging badge.
    fn set_charging(&mut self, charging: bool);

    /// Push a complete snapshot. The default forwards to every setter;
    /// sinks that can redraw atomically should override it.
    fn show(&mut self, state: &VehicleState) {
        self.set_accelerator(state.accelerator_active());
        self.set_brake(state.brake_active());
        self.set_horn(state.horn_active());
        self.set_left_indicator(state.left_indicator_on());
        self.set_right_indicator(state.right_indicator_on());
        self.set_battery_level(state.battery_percent());
        self.set_charging(state.is_charging());
    }
}

// ───────────────────────────────────────────────────────────────
// Audio port (driven adapter: domain → horn sound)
// ───────────────────────────────────────────────────────────────

/// Horn sound player.
pub trait AudioSink {
    fn play(&mut self);

    fn stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists dashboard configuration.
///
/// Implementations MUST validate values before persisting; invalid ranges
/// are rejected with [`ConfigError::ValidationFailed`], not clamped.
pub trait ConfigPort {
    /// Load configuration. Returns [`ConfigError::NotFound`] if nothing
    /// is stored yet.
    fn load(&self) -> Result<DashboardConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &DashboardConfig) -> Result<(), ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage (first start).
    NotFound,
    /// Stored config failed deserialisation.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}

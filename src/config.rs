//! Dashboard configuration parameters
//!
//! All tunable parameters for the dashboard engine. Values can be
//! overridden by a JSON file through [`ConfigPort`](crate::app::ports::ConfigPort);
//! missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::app::signal::SignalTable;
use crate::pins;

/// One scripted pin change, replayed against the simulated pin bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinStep {
    /// Offset from startup (milliseconds).
    pub at_ms: u32,
    pub pin: u8,
    pub high: bool,
}

/// Core dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    // --- Timing ---
    /// Input poll period (milliseconds)
    pub poll_interval_ms: u32,
    /// Battery simulation period (milliseconds)
    pub battery_interval_ms: u32,
    /// Debounce window per signal (milliseconds)
    pub debounce_ms: SignalTable<u32>,

    // --- Wiring ---
    /// GPIO number per signal
    pub pins: SignalTable<u8>,
    /// Address of the remote pin daemon
    pub pin_transport_addr: Option<String>,

    // --- Battery ---
    /// Charge at startup (0-100%)
    pub initial_battery_percent: u8,
    /// Whether charging is on at startup
    pub start_charging: bool,

    // --- Display ---
    /// Top of the speedometer scale
    pub max_speed_kmh: u16,

    // --- Simulation ---
    /// Pin changes replayed when no real pin transport is present
    pub simulated_input: Vec<PinStep>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 100,                    // 10 Hz
            battery_interval_ms: 4000,                // one percent per 4 s
            debounce_ms: SignalTable::uniform(200),

            // Wiring
            pins: SignalTable {
                accelerator: pins::ACCELERATOR_GPIO,
                brake: pins::BRAKE_GPIO,
                horn: pins::HORN_GPIO,
                left_indicator: pins::LEFT_INDICATOR_GPIO,
                right_indicator: pins::RIGHT_INDICATOR_GPIO,
            },
            pin_transport_addr: Some(pins::DEFAULT_PIN_TRANSPORT_ADDR.to_owned()),

            // Battery
            initial_battery_percent: 50,
            start_charging: true,

            // Display
            max_speed_kmh: 200,

            simulated_input: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.battery_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("battery_interval_ms must be > 0"));
        }
        if self.debounce_ms.iter().any(|(_, ms)| ms == 0) {
            return Err(ConfigError::ValidationFailed("debounce_ms must be > 0"));
        }
        if self.initial_battery_percent > 100 {
            return Err(ConfigError::ValidationFailed(
                "initial_battery_percent must be <= 100",
            ));
        }
        if self.max_speed_kmh == 0 {
            return Err(ConfigError::ValidationFailed("max_speed_kmh must be > 0"));
        }
        let pins: Vec<u8> = self.pins.iter().map(|(_, p)| p).collect();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::ValidationFailed("pins must be distinct"));
            }
        }
        Ok(())
    }
}

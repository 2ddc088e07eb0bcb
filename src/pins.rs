//! Default GPIO assignments for the dashboard control panel.
//!
//! Single source of truth for the factory wiring. Every input is a
//! momentary switch to 3V3 with the internal pull-down enabled, so
//! HIGH = pressed. The config file may remap any of these.

/// Accelerator pedal switch.
pub const ACCELERATOR_GPIO: u8 = 17;
/// Brake pedal switch.
pub const BRAKE_GPIO: u8 = 27;
/// Horn push-button.
pub const HORN_GPIO: u8 = 22;
/// Left turn-indicator push-button (toggle on press).
pub const LEFT_INDICATOR_GPIO: u8 = 23;
/// Right turn-indicator push-button (toggle on press).
pub const RIGHT_INDICATOR_GPIO: u8 = 24;

/// Remote pin daemon on the control-panel Pi.
pub const DEFAULT_PIN_TRANSPORT_ADDR: &str = "192.168.1.6";

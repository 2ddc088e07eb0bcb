//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements     | Connects to                   |
//! |---------------|----------------|-------------------------------|
//! | `config_file` | ConfigPort     | JSON file on disk             |
//! | `hal_pins`    | RawPinSource   | `embedded-hal` input pins     |
//! | `log_sink`    | DisplaySink    | Logger (headless dashboard)   |
//! |               | AudioSink      | Logger (horn)                 |
//! | `sim_pins`    | RawPinSource   | In-memory levels / replay     |
//! | `time`        | (none)         | `std::time::Instant`          |

pub mod config_file;
pub mod hal_pins;
pub mod log_sink;
pub mod sim_pins;
pub mod time;

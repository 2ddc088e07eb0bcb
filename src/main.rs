//! EvDash: host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  JsonConfigFile   SimPinBank     LogDisplay     LogAudio     │
//! │  (ConfigPort)     (RawPinSource) (DisplaySink)  (AudioSink)  │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ───────────────         │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │  StateController · BatterySimulator · VehicleState     │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                                                              │
//! │  InputPoller + DebounceFilter (input-poller task)            │
//! │  BatterySimulator tick        (battery-sim task)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `evdash [config.json]` (defaults to `evdash.json`; a missing file
//! means factory defaults). Log level follows `RUST_LOG`, default `info`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use evdash::adapters::config_file::JsonConfigFile;
use evdash::adapters::log_sink::{LogAudio, LogDisplay};
use evdash::adapters::sim_pins::SimPinBank;
use evdash::app::ports::{ConfigError, ConfigPort};
use evdash::config::DashboardConfig;
use evdash::runtime::Dashboard;

const DEFAULT_CONFIG_PATH: &str = "evdash.json";

fn main() -> Result<()> {
    init_logging();
    info!("EvDash v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Config (file or defaults) ──────────────────────────
    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let store = JsonConfigFile::new(&path);
    let config = match store.load() {
        Ok(cfg) => {
            info!("Config loaded from {}", path.display());
            cfg
        }
        Err(ConfigError::NotFound) => {
            info!("No config at {}, using defaults", path.display());
            DashboardConfig::default()
        }
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            DashboardConfig::default()
        }
    };

    // ── 2. Pin source (optional) ──────────────────────────────
    let pins = connect_pins(&config)?;

    // ── 3. Start ──────────────────────────────────────────────
    let dashboard = Dashboard::new(config, LogDisplay::new(), LogAudio::new());
    let _running = dashboard.start(pins).context("starting dashboard")?;

    info!("System ready.");
    // Both tasks run on their own threads until the process exits.
    loop {
        std::thread::park();
    }
}

/// Pick the pin source. A scripted simulation wins; otherwise the remote
/// pin daemon would be used, but no transport for it is built in, so the
/// dashboard runs without input.
fn connect_pins(config: &DashboardConfig) -> Result<Option<SimPinBank>> {
    if !config.simulated_input.is_empty() {
        let bank = SimPinBank::new();
        bank.replay(config.simulated_input.clone())
            .context("starting simulated input")?;
        info!(
            "Using simulated pins ({} scripted steps)",
            config.simulated_input.len()
        );
        return Ok(Some(bank));
    }

    match &config.pin_transport_addr {
        Some(addr) => warn!(
            "Failed to connect to pin daemon at {}: no transport in this build",
            addr
        ),
        None => info!("No pin transport configured"),
    }
    Ok(None)
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

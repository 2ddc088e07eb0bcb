//! Integration tests: the threaded runtime with short periods.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use evdash::adapters::sim_pins::SimPinBank;
use evdash::app::ports::{PinMode, Pull, RawPinSource};
use evdash::app::signal::{Level, SignalTable};
use evdash::config::DashboardConfig;
use evdash::error::{Error, PinError};
use evdash::pins;
use evdash::runtime::Dashboard;

use super::mock_hw::{DisplayCall, MockAudio, MockDisplay};

fn fast_config() -> DashboardConfig {
    DashboardConfig {
        poll_interval_ms: 5,
        battery_interval_ms: 20,
        debounce_ms: SignalTable::uniform(15),
        ..DashboardConfig::default()
    }
}

#[test]
fn power_on_sequence() {
    let dash = Dashboard::new(
        DashboardConfig::default(),
        MockDisplay::default(),
        MockAudio::default(),
    );
    dash.power_on();
    let calls = dash.cockpit().with_sinks(|d, _| d.calls.clone());
    assert_eq!(calls[0], DisplayCall::SpeedRange(200));
    assert!(matches!(calls[1], DisplayCall::Snapshot(s) if s.battery_percent() == 50));
    assert_eq!(&calls[2..], &[DisplayCall::Battery(50), DisplayCall::Charging(true)]);
}

#[test]
fn runs_input_and_battery_concurrently() {
    let bank = SimPinBank::new();
    let running = Dashboard::new(fast_config(), MockDisplay::default(), MockAudio::default())
        .start(Some(bank.clone()))
        .unwrap();
    assert!(running.has_input());

    bank.set(pins::ACCELERATOR_GPIO, Level::High);
    thread::sleep(Duration::from_millis(300));

    let s = running.snapshot();
    assert!(s.accelerator_active());
    assert!(s.battery_percent() > 50);
    running.stop();
}

#[test]
fn battery_runs_without_pins_and_follows_charging_flag() {
    let running = Dashboard::new(fast_config(), MockDisplay::default(), MockAudio::default())
        .start::<SimPinBank>(None)
        .unwrap();
    assert!(!running.has_input());

    thread::sleep(Duration::from_millis(150));
    let charged = running.battery().level();
    assert!(charged > 50);

    running.battery().stop_charging();
    thread::sleep(Duration::from_millis(150));
    assert!(running.battery().level() < charged);
    assert!(!running.snapshot().is_charging());

    let levels = running.cockpit().with_sinks(|d, _| d.battery_levels());
    assert!(levels.iter().all(|p| *p <= 100));
    running.stop();
}

/// Every read blocks until the test opens the gate, then fails.
struct GatedPins {
    gate: mpsc::Receiver<()>,
    reads: Arc<AtomicU32>,
}

impl RawPinSource for GatedPins {
    fn read(&mut self, _pin: u8) -> Result<Level, PinError> {
        // Returns once the sender is dropped.
        let _ = self.gate.recv();
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(PinError::Timeout)
    }
    fn set_mode(&mut self, _pin: u8, _mode: PinMode) -> Result<(), PinError> {
        Ok(())
    }
    fn set_pull_up_down(&mut self, _pin: u8, _pull: Pull) -> Result<(), PinError> {
        Ok(())
    }
}

#[test]
fn battery_ticks_while_pin_setup_hangs() {
    let (open_gate, gate) = mpsc::channel::<()>();
    let reads = Arc::new(AtomicU32::new(0));
    let pins = GatedPins {
        gate,
        reads: Arc::clone(&reads),
    };

    let started = Instant::now();
    let running = Dashboard::new(fast_config(), MockDisplay::default(), MockAudio::default())
        .start(Some(pins))
        .unwrap();
    assert!(started.elapsed() < Duration::from_millis(150));
    assert!(running.has_input());

    thread::sleep(Duration::from_millis(300));
    // Setup is still stuck on its first read.
    assert_eq!(reads.load(Ordering::SeqCst), 0);
    let ticks = running.cockpit().with_sinks(|d, _| d.battery_levels().len());
    // One from power-on, the rest from the 20 ms battery task.
    assert!(ticks > 5, "battery stalled: {} updates", ticks);
    assert!(running.snapshot().battery_percent() > 50);

    drop(open_gate);
    running.stop();
    assert!(reads.load(Ordering::SeqCst) >= 5);
}

/// Every read blocks far longer than the battery period.
struct SlowPins;

impl RawPinSource for SlowPins {
    fn read(&mut self, _pin: u8) -> Result<Level, PinError> {
        thread::sleep(Duration::from_millis(100));
        Err(PinError::Timeout)
    }
    fn set_mode(&mut self, _pin: u8, _mode: PinMode) -> Result<(), PinError> {
        Ok(())
    }
    fn set_pull_up_down(&mut self, _pin: u8, _pull: Pull) -> Result<(), PinError> {
        Ok(())
    }
}

#[test]
fn slow_pin_reads_do_not_stall_battery() {
    let running = Dashboard::new(fast_config(), MockDisplay::default(), MockAudio::default())
        .start(Some(SlowPins))
        .unwrap();

    thread::sleep(Duration::from_millis(300));
    assert!(running.battery().level() > 50);
    running.stop();
}

#[test]
fn invalid_config_is_rejected_before_power_on() {
    let config = DashboardConfig {
        poll_interval_ms: 0,
        ..DashboardConfig::default()
    };
    let dash = Dashboard::new(config, MockDisplay::default(), MockAudio::default());
    let cockpit = dash.cockpit().clone();

    let result = dash.start::<SimPinBank>(None);
    assert!(matches!(result, Err(Error::Config(_))));
    assert!(cockpit.with_sinks(|d, _| d.calls.is_empty()));
}

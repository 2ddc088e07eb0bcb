//! Integration tests: InputPoller setup and per-signal fault isolation.

use evdash::adapters::sim_pins::SimPinBank;
use evdash::app::ports::{PinMode, Pull};
use evdash::app::signal::{Level, Signal, SignalTable};
use evdash::config::DashboardConfig;
use evdash::drivers::poller::InputPoller;
use evdash::error::PinError;
use evdash::pins;

use super::mock_hw::controller;

#[test]
fn setup_configures_pulled_down_inputs() {
    let bank = SimPinBank::new();
    let _poller = InputPoller::from_config(Some(bank.clone()), &DashboardConfig::default());
    for (_, pin) in DashboardConfig::default().pins.iter() {
        assert_eq!(bank.config_of(pin), Some((PinMode::Input, Pull::Down)));
    }
}

#[test]
fn failing_pin_is_skipped_and_recovers() {
    let bank = SimPinBank::new();
    bank.inject_fault(pins::ACCELERATOR_GPIO, PinError::Timeout);
    let mut poller = InputPoller::from_config(Some(bank.clone()), &DashboardConfig::default());
    let ctrl = controller();

    bank.set(pins::ACCELERATOR_GPIO, Level::High);
    bank.set(pins::BRAKE_GPIO, Level::High);
    for t in (0..=300).step_by(100) {
        poller.tick(t, &ctrl);
    }
    let s = ctrl.cockpit().snapshot();
    assert!(s.brake_active(), "healthy signal must still be processed");
    assert!(!s.accelerator_active());
    assert_eq!(poller.read_failures(), 4);

    bank.clear_fault(pins::ACCELERATOR_GPIO);
    for t in (400..=700).step_by(100) {
        poller.tick(t, &ctrl);
    }
    assert!(ctrl.cockpit().snapshot().accelerator_active());
    assert_eq!(poller.read_failures(), 4);
}

#[test]
fn absent_source_produces_nothing() {
    let mut poller: InputPoller<SimPinBank> =
        InputPoller::from_config(None, &DashboardConfig::default());
    let ctrl = controller();
    for t in (0..5000).step_by(100) {
        assert_eq!(poller.tick(t, &ctrl), 0);
    }
    assert!(ctrl.cockpit().with_sinks(|d, _| d.calls.is_empty()));
}

#[test]
fn per_signal_windows() {
    let bank = SimPinBank::new();
    let mut debounce = SignalTable::uniform(200);
    debounce.horn = 50;
    let mut poller =
        InputPoller::new(Some(bank.clone()), &DashboardConfig::default().pins, &debounce);

    bank.set(pins::HORN_GPIO, Level::High);
    bank.set(pins::BRAKE_GPIO, Level::High);
    assert!(poller.poll(0).is_empty());
    let first: Vec<Signal> = poller.poll(100).iter().map(|e| e.signal).collect();
    assert_eq!(first, vec![Signal::Horn]);
    let second: Vec<Signal> = poller.poll(200).iter().map(|e| e.signal).collect();
    assert_eq!(second, vec![Signal::Brake]);
}

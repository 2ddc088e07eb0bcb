//! Recording sinks for integration tests.
//!
//! Records every display and audio call so tests can assert on the full
//! command history without a real screen or speaker.

use evdash::app::cockpit::CockpitHandle;
use evdash::app::controller::StateController;
use evdash::app::ports::{AudioSink, DisplaySink};
use evdash::app::signal::{ConfirmedEdge, Level, Signal};
use evdash::app::state::VehicleState;

// ── Display call record ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    SpeedRange(u16),
    Accelerator(bool),
    Brake(bool),
    Horn(bool),
    LeftIndicator(bool),
    RightIndicator(bool),
    Battery(u8),
    Charging(bool),
    Snapshot(VehicleState),
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn snapshots(&self) -> Vec<VehicleState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Snapshot(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn battery_levels(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Battery(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySink for MockDisplay {
    fn set_speed_range(&mut self, max_speed: u16) {
        self.calls.push(DisplayCall::SpeedRange(max_speed));
    }
    fn set_accelerator(&mut self, active: bool) {
        self.calls.push(DisplayCall::Accelerator(active));
    }
    fn set_brake(&mut self, active: bool) {
        self.calls.push(DisplayCall::Brake(active));
    }
    fn set_horn(&mut self, active: bool) {
        self.calls.push(DisplayCall::Horn(active));
    }
    fn set_left_indicator(&mut self, on: bool) {
        self.calls.push(DisplayCall::LeftIndicator(on));
    }
    fn set_right_indicator(&mut self, on: bool) {
        self.calls.push(DisplayCall::RightIndicator(on));
    }
    fn set_battery_level(&mut self, percent: u8) {
        self.calls.push(DisplayCall::Battery(percent));
    }
    fn set_charging(&mut self, charging: bool) {
        self.calls.push(DisplayCall::Charging(charging));
    }
    fn show(&mut self, state: &VehicleState) {
        self.calls.push(DisplayCall::Snapshot(*state));
    }
}

// ── Audio call record ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play,
    Stop,
}

#[derive(Debug, Default)]
pub struct MockAudio {
    pub calls: Vec<AudioCall>,
}

impl AudioSink for MockAudio {
    fn play(&mut self) {
        self.calls.push(AudioCall::Play);
    }
    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
    }
}

// ── Helpers ───────────────────────────────────────────────────

pub type MockController = StateController<MockDisplay, MockAudio>;

pub fn controller() -> MockController {
    StateController::new(CockpitHandle::new(
        VehicleState::default(),
        MockDisplay::default(),
        MockAudio::default(),
    ))
}

#[allow(dead_code)]
pub fn edge(signal: Signal, level: Level) -> ConfirmedEdge {
    ConfirmedEdge {
        signal,
        level,
        timestamp_ms: 0,
    }
}

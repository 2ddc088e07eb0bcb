//! Log-based display and audio adapters.
//!
//! Implement [`DisplaySink`] and [`AudioSink`] by writing every call to the
//! logger. This is the headless dashboard used by the host binary; a
//! graphical renderer or sound player would implement the same traits.

use log::info;

use crate::app::ports::{AudioSink, DisplaySink};
use crate::app::state::VehicleState;

fn lamp(on: bool) -> &'static str {
    if on { "ON" } else { "off" }
}

/// Adapter that logs every display update to the console.
#[derive(Debug, Default)]
pub struct LogDisplay {
    redraws: u64,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of full snapshots rendered so far.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl DisplaySink for LogDisplay {
    fn set_speed_range(&mut self, max_speed: u16) {
        info!("DISPLAY | speedometer 0..{} km/h", max_speed);
    }

    fn set_accelerator(&mut self, active: bool) {
        info!("DISPLAY | accelerator={}", lamp(active));
    }

    fn set_brake(&mut self, active: bool) {
        info!("DISPLAY | brake={}", lamp(active));
    }

    fn set_horn(&mut self, active: bool) {
        info!("DISPLAY | horn={}", lamp(active));
    }

    fn set_left_indicator(&mut self, on: bool) {
        info!("DISPLAY | left indicator={}", lamp(on));
    }

    fn set_right_indicator(&mut self, on: bool) {
        info!("DISPLAY | right indicator={}", lamp(on));
    }

    fn set_battery_level(&mut self, percent: u8) {
        info!("DISPLAY | battery={}%", percent);
    }

    fn set_charging(&mut self, charging: bool) {
        info!("DISPLAY | charging={}", lamp(charging));
    }

    fn show(&mut self, s: &VehicleState) {
        self.redraws += 1;
        info!(
            "DISPLAY | accel={} brake={} horn={} | <{} {}> | battery={}%{}",
            lamp(s.accelerator_active()),
            lamp(s.brake_active()),
            lamp(s.horn_active()),
            lamp(s.left_indicator_on()),
            lamp(s.right_indicator_on()),
            s.battery_percent(),
            if s.is_charging() { " (charging)" } else { "" },
        );
    }
}

/// Adapter that logs horn playback instead of producing sound.
#[derive(Debug, Default)]
pub struct LogAudio;

impl LogAudio {
    pub fn new() -> Self {
        Self
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self) {
        info!("AUDIO | horn sound playing");
    }

    fn stop(&mut self) {
        info!("AUDIO | horn sound stopped");
    }
}

//! Synthetic battery charge model.
//!
//! Each [`tick`](BatterySimulator::tick) moves the charge one percent toward
//! full while charging, or toward empty while discharging, and stops at the
//! bounds. The display is told the resulting level on every tick, including
//! clamped no-op ticks, so a late-attached renderer always resynchronises.

use log::{debug, info};

use crate::app::cockpit::{Cockpit, CockpitHandle};
use crate::app::ports::DisplaySink;

pub struct BatterySimulator<D, A> {
    cockpit: CockpitHandle<D, A>,
}

impl<D, A> Clone for BatterySimulator<D, A> {
    fn clone(&self) -> Self {
        Self {
            cockpit: self.cockpit.clone(),
        }
    }
}

impl<D: DisplaySink, A> BatterySimulator<D, A> {
    pub fn new(cockpit: CockpitHandle<D, A>) -> Self {
        Self { cockpit }
    }

    /// One simulation step. Returns the level after the step.
    pub fn tick(&self) -> u8 {
        let mut guard = self.cockpit.lock();
        let Cockpit { state, display, .. } = &mut *guard;

        if state.step_battery() {
            if state.is_charging() {
                info!("Battery level: {}% (Charging)", state.battery_percent());
            } else {
                info!("Battery level: {}%", state.battery_percent());
            }
        } else {
            debug!(
                "Battery level held at {}% (charging={})",
                state.battery_percent(),
                state.is_charging()
            );
        }

        display.set_battery_level(state.battery_percent());
        state.battery_percent()
    }

    /// Switch charging on and re-notify the display immediately.
    pub fn start_charging(&self) {
        self.set_charging(true);
    }

    /// Switch charging off and re-notify the display immediately.
    pub fn stop_charging(&self) {
        self.set_charging(false);
    }

    pub fn is_charging(&self) -> bool {
        self.cockpit.snapshot().is_charging()
    }

    pub fn level(&self) -> u8 {
        self.cockpit.snapshot().battery_percent()
    }

    fn set_charging(&self, charging: bool) {
        let mut guard = self.cockpit.lock();
        let Cockpit { state, display, .. } = &mut *guard;

        state.set_charging(charging);
        info!(
            "Battery level remains at: {}% (Charging: {})",
            state.battery_percent(),
            charging
        );
        display.set_battery_level(state.battery_percent());
        display.set_charging(charging);
    }
}

//! The authoritative vehicle state model.
//!
//! Fields are private; the only mutators are crate-internal and each one
//! keeps the invariants intact on return:
//!
//! - the left and right indicators are never both on;
//! - the battery level stays within `0..=100`, rising only while charging
//!   and falling only while discharging.

/// Upper bound of the battery gauge.
pub const BATTERY_MAX_PERCENT: u8 = 100;

/// Snapshot of every dashboard-relevant control and battery value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleState {
    accelerator_active: bool,
    brake_active: bool,
    horn_active: bool,
    left_indicator_on: bool,
    right_indicator_on: bool,
    battery_percent: u8,
    charging: bool,
}

impl Default for VehicleState {
    /// 50 % charge, charging, every control released.
    fn default() -> Self {
        Self::with_battery(50, true)
    }
}

impl VehicleState {
    /// All controls released with the given battery state. The level is
    /// clamped to `0..=100`.
    pub fn with_battery(percent: u8, charging: bool) -> Self {
        Self {
            accelerator_active: false,
            brake_active: false,
            horn_active: false,
            left_indicator_on: false,
            right_indicator_on: false,
            battery_percent: percent.min(BATTERY_MAX_PERCENT),
            charging,
        }
    }

    pub fn accelerator_active(&self) -> bool {
        self.accelerator_active
    }

    pub fn brake_active(&self) -> bool {
        self.brake_active
    }

    pub fn horn_active(&self) -> bool {
        self.horn_active
    }

    pub fn left_indicator_on(&self) -> bool {
        self.left_indicator_on
    }

    pub fn right_indicator_on(&self) -> bool {
        self.right_indicator_on
    }

    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    // ── Control mutators (StateController only) ───────────────

    pub(crate) fn set_accelerator(&mut self, active: bool) {
        self.accelerator_active = active;
    }

    pub(crate) fn set_brake(&mut self, active: bool) {
        self.brake_active = active;
    }

    pub(crate) fn set_horn(&mut self, active: bool) {
        self.horn_active = active;
    }

    /// Flip the left indicator; switching it on forces the right one off.
    /// Returns the new left indicator state.
    pub(crate) fn toggle_left_indicator(&mut self) -> bool {
        self.left_indicator_on = !self.left_indicator_on;
        if self.left_indicator_on {
            self.right_indicator_on = false;
        }
        self.left_indicator_on
    }

    /// Flip the right indicator; switching it on forces the left one off.
    /// Returns the new right indicator state.
    pub(crate) fn toggle_right_indicator(&mut self) -> bool {
        self.right_indicator_on = !self.right_indicator_on;
        if self.right_indicator_on {
            self.left_indicator_on = false;
        }
        self.right_indicator_on
    }

    // ── Battery mutators (BatterySimulator only) ──────────────

    pub(crate) fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Move the battery one percent in the direction given by the charging
    /// flag. Returns `false` when already at the bound for that direction.
    pub(crate) fn step_battery(&mut self) -> bool {
        if self.charging && self.battery_percent < BATTERY_MAX_PERCENT {
            self.battery_percent += 1;
            true
        } else if !self.charging && self.battery_percent > 0 {
            self.battery_percent -= 1;
            true
        } else {
            false
        }
    }
}

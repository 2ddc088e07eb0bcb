//! Wiring and lifecycle.
//!
//! [`Dashboard`] owns the shared cockpit and builds the two writers on top
//! of it. [`Dashboard::start`] performs the power-on sequence and launches
//! the two periodic tasks on their own threads:
//!
//! ```text
//!  ┌────────────────────┐  every poll_interval_ms
//!  │ input-poller task  │── InputPoller::tick ──▶ StateController ──┐
//!  └────────────────────┘                                           ▼
//!                                                          Mutex<Cockpit>
//!  ┌────────────────────┐  every battery_interval_ms                ▲
//!  │ battery-sim task   │── BatterySimulator::tick ─────────────────┘
//!  └────────────────────┘
//! ```

use std::time::Duration;

use log::{info, warn};

use crate::adapters::time::MonotonicClock;
use crate::app::battery::BatterySimulator;
use crate::app::cockpit::CockpitHandle;
use crate::app::controller::StateController;
use crate::app::ports::{AudioSink, ConfigError, DisplaySink, RawPinSource};
use crate::app::state::VehicleState;
use crate::config::DashboardConfig;
use crate::drivers::periodic::PeriodicTask;
use crate::drivers::poller::InputPoller;
use crate::error::{Error, Result};

pub struct Dashboard<D, A> {
    config: DashboardConfig,
    cockpit: CockpitHandle<D, A>,
}

impl<D, A> Dashboard<D, A>
where
    D: DisplaySink + Send + 'static,
    A: AudioSink + Send + 'static,
{
    /// Build the initial state from `config`. Nothing is pushed to the
    /// sinks until [`start`](Self::start).
    pub fn new(config: DashboardConfig, display: D, audio: A) -> Self {
        let state =
            VehicleState::with_battery(config.initial_battery_percent, config.start_charging);
        Self {
            config,
            cockpit: CockpitHandle::new(state, display, audio),
        }
    }

    pub fn cockpit(&self) -> &CockpitHandle<D, A> {
        &self.cockpit
    }

    /// Speed range, full snapshot, then the charging state, in that order.
    pub fn power_on(&self) {
        let max_speed = self.config.max_speed_kmh;
        self.cockpit.with_sinks(|display, _| display.set_speed_range(max_speed));
        self.cockpit.redraw();

        let battery = BatterySimulator::new(self.cockpit.clone());
        if self.config.start_charging {
            battery.start_charging();
        } else {
            battery.stop_charging();
        }
    }

    /// Power on and launch the periodic tasks. With no pin source the input
    /// task is not started and the dashboard only runs the battery model.
    ///
    /// Pin setup touches the source, so it runs on the input thread at its
    /// first tick: `start` itself never blocks on a pin read.
    pub fn start<P>(self, pins: Option<P>) -> Result<Running<D, A>>
    where
        P: RawPinSource + Send + 'static,
    {
        self.config.validate().map_err(|e| {
            warn!("Refusing to start: {}", e);
            match e {
                ConfigError::ValidationFailed(msg) => Error::Config(msg),
                _ => Error::Config("invalid configuration"),
            }
        })?;

        self.power_on();

        let battery = BatterySimulator::new(self.cockpit.clone());
        let sim = battery.clone();
        let battery_task = PeriodicTask::spawn(
            "battery-sim",
            Duration::from_millis(u64::from(self.config.battery_interval_ms)),
            move || {
                sim.tick();
            },
        )?;

        let input = match pins {
            Some(source) => {
                let mut source = Some(source);
                let mut poller = None;
                let pin_map = self.config.pins;
                let debounce_ms = self.config.debounce_ms;
                let controller = StateController::new(self.cockpit.clone());
                let clock = MonotonicClock::new();
                Some(PeriodicTask::spawn(
                    "input-poller",
                    Duration::from_millis(u64::from(self.config.poll_interval_ms)),
                    move || {
                        let poller = poller.get_or_insert_with(|| {
                            InputPoller::new(source.take(), &pin_map, &debounce_ms)
                        });
                        poller.tick(clock.now_ms(), &controller);
                    },
                )?)
            }
            None => {
                warn!("GPIO unavailable: dashboard will not receive control input");
                None
            }
        };

        info!("Dashboard running");
        Ok(Running {
            cockpit: self.cockpit,
            battery,
            input,
            battery_task,
        })
    }
}

/// Handle to a started dashboard. Dropping it stops both tasks.
pub struct Running<D, A> {
    cockpit: CockpitHandle<D, A>,
    battery: BatterySimulator<D, A>,
    input: Option<PeriodicTask>,
    battery_task: PeriodicTask,
}

impl<D: DisplaySink, A> Running<D, A> {
    pub fn snapshot(&self) -> VehicleState {
        self.cockpit.snapshot()
    }

    pub fn cockpit(&self) -> &CockpitHandle<D, A> {
        &self.cockpit
    }

    /// External charging control.
    pub fn battery(&self) -> &BatterySimulator<D, A> {
        &self.battery
    }

    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    /// Stop both tasks and wait for them to exit.
    pub fn stop(self) {
        if let Some(input) = self.input {
            input.stop();
        }
        self.battery_task.stop();
        info!("Dashboard stopped");
    }
}

//! In-memory pin bank for simulation and tests.
//!
//! [`SimPinBank`] implements [`RawPinSource`] over a shared table of levels.
//! Clones share the table, so one clone can be handed to the poller while
//! another drives the lines from a test or a replay script. Unset pins read
//! `Low`, matching a pulled-down input with the switch open.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::app::ports::{PinMode, Pull, RawPinSource};
use crate::app::signal::Level;
use crate::config::PinStep;
use crate::error::{Error, PinError};

#[derive(Debug, Default)]
struct Bank {
    levels: HashMap<u8, Level>,
    faults: HashMap<u8, PinError>,
    modes: HashMap<u8, (PinMode, Pull)>,
}

#[derive(Debug, Clone, Default)]
pub struct SimPinBank {
    bank: Arc<Mutex<Bank>>,
}

impl SimPinBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive `pin` to `level`.
    pub fn set(&self, pin: u8, level: Level) {
        self.lock().levels.insert(pin, level);
    }

    /// Make every read of `pin` fail with `error` until [`clear_fault`](Self::clear_fault).
    pub fn inject_fault(&self, pin: u8, error: PinError) {
        self.lock().faults.insert(pin, error);
    }

    pub fn clear_fault(&self, pin: u8) {
        self.lock().faults.remove(&pin);
    }

    /// Mode and pull last configured on `pin`.
    pub fn config_of(&self, pin: u8) -> Option<(PinMode, Pull)> {
        self.lock().modes.get(&pin).copied()
    }

    /// Replay `script` on a background thread, each step at its offset
    /// from the call.
    pub fn replay(&self, mut script: Vec<PinStep>) -> Result<thread::JoinHandle<()>, Error> {
        script.sort_by_key(|s| s.at_ms);
        let bank = self.clone();
        thread::Builder::new()
            .name("pin-replay".into())
            .spawn(move || {
                let mut elapsed = 0u32;
                for step in script {
                    thread::sleep(Duration::from_millis(u64::from(step.at_ms - elapsed)));
                    elapsed = step.at_ms;
                    info!("SIM | GPIO {} -> {}", step.pin, if step.high { "HIGH" } else { "LOW" });
                    bank.set(step.pin, Level::from(step.high));
                }
                debug!("SIM | replay finished");
            })
            .map_err(|_| Error::Init("pin replay thread spawn failed"))
    }

    fn lock(&self) -> MutexGuard<'_, Bank> {
        self.bank.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RawPinSource for SimPinBank {
    fn read(&mut self, pin: u8) -> Result<Level, PinError> {
        let bank = self.lock();
        if let Some(e) = bank.faults.get(&pin) {
            return Err(*e);
        }
        Ok(bank.levels.get(&pin).copied().unwrap_or_default())
    }

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), PinError> {
        let mut bank = self.lock();
        let entry = bank.modes.entry(pin).or_insert((mode, Pull::Off));
        entry.0 = mode;
        Ok(())
    }

    fn set_pull_up_down(&mut self, pin: u8, pull: Pull) -> Result<(), PinError> {
        let mut bank = self.lock();
        let entry = bank.modes.entry(pin).or_insert((PinMode::Input, pull));
        entry.1 = pull;
        Ok(())
    }
}

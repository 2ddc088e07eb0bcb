//! `embedded-hal` pin bank.
//!
//! Serves [`RawPinSource`] from a fixed set of [`InputPin`]s, e.g. the
//! lines of a Linux GPIO character device or an MCU HAL. With
//! `embedded-hal` the direction and bias are fixed when the pin object is
//! built, so configuration calls only confirm what is already true: input
//! mode with a pull-down (or no pull) is accepted, anything else is
//! [`PinError::Unsupported`].

use embedded_hal::digital::{Error as _, InputPin};
use heapless::Vec;
use log::{debug, warn};

use crate::app::ports::{PinMode, Pull, RawPinSource};
use crate::app::signal::{Level, SIGNAL_COUNT};
use crate::error::PinError;

pub struct HalPinBank<P> {
    pins: Vec<(u8, P), SIGNAL_COUNT>,
}

impl<P: InputPin> HalPinBank<P> {
    pub fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Register `pin` under GPIO number `gpio`. Fails if the bank is full
    /// or the number is already taken.
    pub fn attach(&mut self, gpio: u8, pin: P) -> Result<(), PinError> {
        if self.pins.iter().any(|(n, _)| *n == gpio) {
            return Err(PinError::Unsupported);
        }
        self.pins
            .push((gpio, pin))
            .map_err(|_| PinError::Unsupported)
    }

    fn pin_mut(&mut self, gpio: u8) -> Result<&mut P, PinError> {
        self.pins
            .iter_mut()
            .find(|(n, _)| *n == gpio)
            .map(|(_, p)| p)
            .ok_or(PinError::UnknownPin(gpio))
    }
}

impl<P: InputPin> Default for HalPinBank<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin> RawPinSource for HalPinBank<P> {
    fn read(&mut self, gpio: u8) -> Result<Level, PinError> {
        self.pin_mut(gpio)?
            .is_high()
            .map(Level::from)
            .map_err(|e| {
                debug!("GPIO {} HAL error: {:?}", gpio, e.kind());
                PinError::ReadFailed
            })
    }

    fn set_mode(&mut self, gpio: u8, mode: PinMode) -> Result<(), PinError> {
        self.pin_mut(gpio)?;
        match mode {
            PinMode::Input => Ok(()),
            PinMode::Output => {
                warn!("GPIO {} is input-only", gpio);
                Err(PinError::Unsupported)
            }
        }
    }

    fn set_pull_up_down(&mut self, gpio: u8, pull: Pull) -> Result<(), PinError> {
        self.pin_mut(gpio)?;
        match pull {
            Pull::Down | Pull::Off => Ok(()),
            Pull::Up => Err(PinError::Unsupported),
        }
    }
}

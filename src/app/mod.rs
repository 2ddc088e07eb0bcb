//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of the dashboard: the vehicle state and
//! its invariants, how confirmed input edges change it, and the battery
//! model. All interaction with pins, screens and speakers happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod battery;
pub mod cockpit;
pub mod controller;
pub mod ports;
pub mod signal;
pub mod state;

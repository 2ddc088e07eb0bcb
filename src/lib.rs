//! EvDash dashboard engine library.
//!
//! Debounces digital control inputs, keeps the vehicle state consistent and
//! drives display and audio sinks. Hardware and presentation live behind
//! the port traits in [`app::ports`]; everything here runs on a host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod runtime;

//! Unified error types for the dashboard engine.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! runtime's error handling uniform. All variants are `Copy` so they can be
//! passed through the poller and logged without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the engine funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A GPIO line could not be configured or read.
    Pin(PinError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// Startup of a task or collaborator failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "pin: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pin errors
// ---------------------------------------------------------------------------

/// Failures reported by a [`RawPinSource`](crate::app::ports::RawPinSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The transport returned an error for this read.
    ReadFailed,
    /// The read did not complete within the transport's latency bound.
    Timeout,
    /// The pin number is not served by this source.
    UnknownPin(u8),
    /// The requested mode or pull configuration is not supported.
    Unsupported,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "GPIO read failed"),
            Self::Timeout => write!(f, "GPIO read timed out"),
            Self::UnknownPin(pin) => write!(f, "unknown pin {pin}"),
            Self::Unsupported => write!(f, "unsupported pin configuration"),
        }
    }
}

impl std::error::Error for PinError {}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

//! Input-side mechanics: debouncing, polling, and the periodic task loop.

pub mod debounce;
pub mod periodic;
pub mod poller;

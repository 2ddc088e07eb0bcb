//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. All tests run on the host with no real GPIO
//! required.

mod mock_hw;
mod poller_tests;
mod runtime_tests;

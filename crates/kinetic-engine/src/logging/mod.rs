//! Logging utilities.
//!
//! This module centralizes logger initialization. Library crates only ever
//! talk to the `log` facade; binaries call [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};

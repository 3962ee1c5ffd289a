//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade; this module is the single
//! place that installs a backend (`env_logger`) for binaries and demos.

mod init;

pub use init::{init_logging, LoggingConfig};

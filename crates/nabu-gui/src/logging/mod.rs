//! Logger setup.
//!
//! The crate logs through the `log` facade only; this module wires up an
//! `env_logger` backend for hosts that do not bring their own.

mod init;

pub use init::{init_logging, LoggingConfig};

//! Logger setup.
//!
//! The engine itself only talks to the `log` facade (`debug!` per flatten,
//! `trace!` per collage). Binaries call [`init_logging`] once to install an
//! `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};

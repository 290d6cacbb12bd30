//! Infrastructure layer: filesystem probes, settings, errors, and logging.

pub mod config;
pub mod contracts;
pub mod error;
pub mod fs_probe;
pub mod logging;

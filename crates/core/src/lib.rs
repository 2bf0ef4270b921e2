//! Core functionality for the Skylark drone-operations workspace.
//!
//! This crate carries the ambient pieces shared by every member:
//! the error type, configuration loading and logging initialization.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LogFormat, LoggingConfig, StoreBackend, StoreConfig};
pub use error::{CoreError, Result};

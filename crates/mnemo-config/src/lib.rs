//! Configuration schema and loading for Mnemo.
//!
//! This crate owns the config schema, JSON5 loading, and validation used
//! by the server binary and embedding consumers.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default config filename.
pub use loader::DEFAULT_CONFIG_FILE;
/// Configuration schema models.
pub use model::*;

//! Configuration management
//!
//! Layered configuration with Figment: defaults, then a TOML file, then
//! `KVS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, StorageConfig};

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the storage backends.
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML file, `KVS__` env) |
//! | [`bootstrap`] | `StorageContext` composition root |
//! | [`storage`] | Provider factory, typed access, background expiry sweeper |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use bootstrap::StorageContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;

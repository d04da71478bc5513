//! # kvs
//!
//! Uniform keyed value storage for server components (session state, rate
//! limiting, plug-in state, routing metadata) that must not depend on which
//! backend is active.
//!
//! ## Example
//!
//! ```ignore
//! use kvs::prelude::*;
//! use serde_json::json;
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let context = StorageContext::init(config)?;
//!
//! let sessions = context.storage("sessions")?;
//! sessions.put_with_ttl("u1", json!({"name": "bob"}), 1800)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Storage contract, provider port, error taxonomy
//! - `providers` - Container registry, memory and expiring backends
//! - `infrastructure` - Configuration, logging, factory, sweeper, bootstrap

/// Domain layer - storage contract and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use kvs_domain::*;
}

/// Provider layer - in-memory storage backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use kvs_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use kvs_infrastructure::*;
}

/// Commonly used items
pub mod prelude {
    pub use kvs_domain::error::{Error, Result};
    pub use kvs_domain::ports::{Clock, Storage, StorageProvider};
    pub use kvs_domain::value_objects::BackendKind;
    pub use kvs_infrastructure::config::{AppConfig, ConfigLoader};
    pub use kvs_infrastructure::logging::init_logging;
    pub use kvs_infrastructure::storage::TypedStorage;
    pub use kvs_infrastructure::StorageContext;
    pub use kvs_providers::{ContainerRegistry, ExpiringStorageProvider, MemoryStorageProvider};
}

pub use kvs_domain::error::{Error, Result};
pub use kvs_infrastructure::StorageContext;

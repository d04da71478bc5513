//! # kvs - Storage Backends
//!
//! In-memory implementations of the storage contract defined in
//! `kvs-domain`.
//!
//! ## Backends
//!
//! | Backend | Storage | Provider | Description |
//! |---------|---------|----------|-------------|
//! | Memory | [`MemoryStorage`] | [`MemoryStorageProvider`] | Non-expiring named map |
//! | Expiring | [`ExpiringStorage`] | [`ExpiringStorageProvider`] | Per-entry TTL, lazy eviction on access |
//!
//! Every storage is bound to a named [`Container`] held by a
//! [`ContainerRegistry`]. The registry is an explicit service: build it once
//! and hand the same `Arc` to every provider that must share data by name.
//!
//! ## Usage
//!
//! ```ignore
//! use kvs_providers::{ContainerRegistry, ExpiringStorageProvider};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ContainerRegistry::new());
//! let provider = ExpiringStorageProvider::new(registry);
//! let sessions = provider.get_storage("sessions")?;
//! sessions.put_with_ttl("u1", serde_json::json!({"name": "bob"}), 2)?;
//! ```

pub use kvs_domain::error::{Error, Result};
pub use kvs_domain::ports::{Clock, Storage, StorageProvider};

/// Clock implementations
pub mod clock;

/// Process-wide named container registry
pub mod registry;

/// Storage backends and their providers
pub mod storage;

pub use clock::{ManualClock, SystemClock};
pub use registry::{Container, ContainerRegistry};
pub use storage::{
    ExpiringStorage, ExpiringStorageProvider, MemoryStorage, MemoryStorageProvider,
};

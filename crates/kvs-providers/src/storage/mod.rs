//! Storage backend implementations
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`MemoryStorage`] | Local | Non-expiring named map |
//! | [`ExpiringStorage`] | Local | TTL per entry, evicted lazily when read |
//!
//! ## Backend Selection Guide
//!
//! - **Plug-in state, routing metadata**: `MemoryStorage`
//! - **Sessions, rate-limit windows**: `ExpiringStorage`

mod binding;
pub mod expiring;
pub mod memory;
pub mod provider;

pub use expiring::ExpiringStorage;
pub use memory::MemoryStorage;
pub use provider::{ExpiringStorageProvider, MemoryStorageProvider};

//! Backend kind identifiers

use crate::constants::{EXPIRING_PROVIDER_NAME, MEMORY_PROVIDER_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage backend kinds a provider can be created for
///
/// Only the in-memory kinds are served by this workspace; remote engines
/// are handled by external adapters and report `BackendUnavailable`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Non-expiring in-memory map
    #[default]
    Memory,
    /// In-memory map with per-entry TTL and lazy eviction
    Expiring,
    /// Redis-backed storage (external adapter)
    Redis,
    /// Memcached-backed storage (external adapter)
    Memcached,
}

impl BackendKind {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => MEMORY_PROVIDER_NAME,
            Self::Expiring => EXPIRING_PROVIDER_NAME,
            Self::Redis => "redis",
            Self::Memcached => "memcached",
        }
    }

    /// Whether entries written with a TTL expire on this backend
    pub fn supports_expiration(&self) -> bool {
        !matches!(self, Self::Memory)
    }

    /// Whether the backend lives in this process
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Memory | Self::Expiring)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

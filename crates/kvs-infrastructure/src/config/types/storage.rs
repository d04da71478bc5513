//! Storage configuration types

use crate::constants::{STORAGE_DEFAULT_SWEEP_INTERVAL_SECS, STORAGE_DEFAULT_TTL_SECS};
use kvs_domain::value_objects::BackendKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind (memory, expiring, redis, memcached)
    pub backend: BackendKind,

    /// TTL applied by typed puts without explicit TTL (<= 0 never expires)
    pub default_ttl_secs: i64,

    /// Background expiry sweep interval in seconds (0 disables the sweeper)
    pub sweep_interval_secs: u64,
}

impl StorageConfig {
    /// Sweep interval, `None` when the sweeper is disabled
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            default_ttl_secs: STORAGE_DEFAULT_TTL_SECS,
            sweep_interval_secs: STORAGE_DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

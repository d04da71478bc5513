//! Application configuration root

use super::{LoggingConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Storage backend configuration
    pub storage: StorageConfig,
}

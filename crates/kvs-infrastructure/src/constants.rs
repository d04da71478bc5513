//! Infrastructure layer constants
//!
//! Domain constants live in `kvs_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "kvs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "kvs";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "KVS";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default TTL applied by typed puts (0 = never expires)
pub const STORAGE_DEFAULT_TTL_SECS: i64 = 0;

/// Background sweep interval (0 = sweeper disabled)
pub const STORAGE_DEFAULT_SWEEP_INTERVAL_SECS: u64 = 0;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "KVS_LOG";

/// Fallback file stem for rolling log files
pub const LOG_FILE_STEM: &str = "kvs";

//! Domain layer constants

/// TTL value meaning "never expires"
pub const NO_EXPIRATION: i64 = 0;

/// Provider name of the plain in-memory backend
pub const MEMORY_PROVIDER_NAME: &str = "memory";

/// Provider name of the TTL-based expiring backend
pub const EXPIRING_PROVIDER_NAME: &str = "expiring";

//! Clock Port
//!
//! Time source for expiration decisions. Backends never read the system
//! time directly so that TTL behavior can be driven deterministically.

/// Whole-second time source
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current time in whole seconds since the Unix epoch
    fn now_secs(&self) -> i64;
}

//! Clock implementations
//!
//! - [`SystemClock`]: wall-clock UTC seconds
//! - [`ManualClock`]: externally driven time for deterministic expiration

use kvs_domain::ports::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually advanced time source
///
/// # Example
///
/// ```rust
/// use kvs_providers::ManualClock;
/// use kvs_providers::Clock;
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(3);
/// assert_eq!(clock.now_secs(), 1_003);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock stopped at `start` seconds
    pub fn new(start: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    /// Move the clock forward by `secs`
    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Set the current time
    pub fn set(&self, secs: i64) {
        self.now.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

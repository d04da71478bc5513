//! Stored entry with expiration metadata

use crate::constants::NO_EXPIRATION;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value held by a named container
///
/// `inserted_at` is a whole-second timestamp. A `ttl_secs` of zero or less
/// means the entry never expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stored value
    pub value: Value,
    /// Insertion time in whole seconds
    pub inserted_at: i64,
    /// Time to live in seconds (<= 0 never expires)
    pub ttl_secs: i64,
}

impl Entry {
    /// Create a non-expiring entry
    pub fn new(value: Value, inserted_at: i64) -> Self {
        Self::with_ttl(value, inserted_at, NO_EXPIRATION)
    }

    /// Create an entry with the given TTL
    pub fn with_ttl(value: Value, inserted_at: i64, ttl_secs: i64) -> Self {
        Self {
            value,
            inserted_at,
            ttl_secs,
        }
    }

    /// Whether this entry has a finite lifetime
    pub fn expires(&self) -> bool {
        self.ttl_secs > 0
    }

    /// Last second at which the entry is still valid
    pub fn expires_at(&self) -> Option<i64> {
        self.expires()
            .then(|| self.inserted_at.saturating_add(self.ttl_secs))
    }

    /// Validity check; the boundary second is inclusive
    pub fn is_valid_at(&self, now: i64) -> bool {
        match self.expires_at() {
            None => true,
            Some(deadline) => deadline >= now,
        }
    }

    /// Seconds left before expiration, `None` for non-expiring entries
    pub fn remaining_secs(&self, now: i64) -> Option<i64> {
        self.expires_at().map(|deadline| (deadline - now).max(0))
    }
}

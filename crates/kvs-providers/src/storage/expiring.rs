//! Expiring in-memory storage
//!
//! Every entry carries its insertion time and a TTL in whole seconds.
//! Expiration is lazy: an entry is removed the moment a read or an
//! enumeration finds it expired, never by a timer.
//!
//! ## Validity
//!
//! An entry is valid while `ttl <= 0` or `inserted_at + ttl >= now`. The
//! boundary second is inclusive, so an entry stored at `t0` with TTL `n` is
//! readable up to and including `t0 + n` and gone from `t0 + n + 1`.
//!
//! Keys nobody reads again stay resident past their TTL until the next
//! enumeration or an explicit [`ExpiringStorage::purge_expired`].

use super::binding::Binding;
use crate::clock::SystemClock;
use crate::registry::{self, ContainerRegistry, EntryMap};
use kvs_domain::constants::{EXPIRING_PROVIDER_NAME, NO_EXPIRATION};
use kvs_domain::error::{Error, Result};
use kvs_domain::ports::{Clock, Storage};
use kvs_domain::value_objects::Entry;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::trace;

/// TTL-based in-memory storage with lazy eviction
///
/// # Example
///
/// ```rust
/// use kvs_providers::{ContainerRegistry, ExpiringStorage, ManualClock, Storage};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let clock = Arc::new(ManualClock::new(0));
/// let sessions = ExpiringStorage::with_clock(
///     Arc::new(ContainerRegistry::new()),
///     "sessions",
///     clock.clone(),
/// );
/// sessions.initialize().unwrap();
///
/// sessions.put_with_ttl("u1", json!({"name": "bob"}), 2).unwrap();
/// assert!(sessions.get("u1").unwrap().is_some());
///
/// clock.advance(3);
/// assert!(sessions.get("u1").unwrap().is_none());
/// assert_eq!(sessions.size().unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct ExpiringStorage {
    binding: Binding,
    clock: Arc<dyn Clock>,
}

impl ExpiringStorage {
    /// Create an uninitialized handle for `name` using the system clock
    pub fn new(registry: Arc<ContainerRegistry>, name: impl Into<String>) -> Self {
        Self::with_clock(registry, name, Arc::new(SystemClock::new()))
    }

    /// Create an uninitialized handle for `name` using `clock`
    pub fn with_clock(
        registry: Arc<ContainerRegistry>,
        name: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            binding: Binding::new(registry, name),
            clock,
        }
    }

    /// Stored entry with its expiration metadata, if still valid
    pub fn get_entry(&self, key: &str) -> Result<Option<Entry>> {
        self.with_valid_entries(|entries, now| Ok(lookup(entries, key, now).cloned()))
    }

    /// Evict every expired entry of this storage's container
    ///
    /// Returns the number of evicted entries.
    pub fn purge_expired(&self) -> Result<usize> {
        let container = self.binding.container()?;
        let evicted = container.purge_expired(self.clock.now_secs());
        if evicted > 0 {
            trace!(storage = %self.binding.name(), evicted, "Purged expired entries");
        }
        Ok(evicted)
    }

    /// Run `f` on the locked map after sweeping every expired entry
    fn with_swept_entries<T>(&self, f: impl FnOnce(&EntryMap) -> T) -> Result<T> {
        let container = self.binding.container()?;
        let now = self.clock.now_secs();
        let mut entries = container.lock();
        let evicted = registry::purge_expired(&mut *entries, now);
        if evicted > 0 {
            trace!(storage = %self.binding.name(), evicted, "Evicted expired entries");
        }
        Ok(f(&*entries))
    }

    /// Run `f` on the locked map with the current time
    fn with_valid_entries<T>(
        &self,
        f: impl FnOnce(&mut EntryMap, i64) -> Result<T>,
    ) -> Result<T> {
        let container = self.binding.container()?;
        let now = self.clock.now_secs();
        let mut entries = container.lock();
        f(&mut *entries, now)
    }
}

/// Valid entry under `key`; an expired one is removed on the spot
fn lookup<'a>(entries: &'a mut EntryMap, key: &str, now: i64) -> Option<&'a Entry> {
    let expired = entries.get(key).is_some_and(|entry| !entry.is_valid_at(now));
    if expired {
        entries.remove(key);
        trace!(key, "Evicted expired entry");
        return None;
    }
    entries.get(key)
}

impl Storage for ExpiringStorage {
    fn initialize(&self) -> Result<()> {
        self.binding.initialize(EXPIRING_PROVIDER_NAME)
    }

    fn shutdown(&self) -> Result<()> {
        self.binding.shutdown(EXPIRING_PROVIDER_NAME)
    }

    fn is_initialized(&self) -> bool {
        self.binding.is_initialized()
    }

    fn name(&self) -> String {
        self.binding.name()
    }

    fn set_name(&self, name: &str) -> Result<()> {
        self.binding.rename(name)
    }

    fn provider_name(&self) -> &str {
        EXPIRING_PROVIDER_NAME
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.with_valid_entries(|entries, now| {
            Ok(lookup(entries, key, now).map(|entry| entry.value.clone()))
        })
    }

    fn put(&self, key: &str, value: Value) -> Result<Value> {
        self.put_with_ttl(key, value, NO_EXPIRATION)
    }

    fn put_with_ttl(&self, key: &str, value: Value, ttl_secs: i64) -> Result<Value> {
        self.with_valid_entries(|entries, now| {
            entries.insert(
                key.to_string(),
                Entry::with_ttl(value.clone(), now, ttl_secs),
            );
            Ok(value)
        })
    }

    fn remove(&self, key: &str) -> Result<Value> {
        self.with_valid_entries(|entries, now| match entries.remove(key) {
            Some(entry) if entry.is_valid_at(now) => Ok(entry.value),
            Some(_) => {
                trace!(key, "Evicted expired entry on remove");
                Err(Error::not_found(format!("key '{key}'")))
            }
            None => Err(Error::not_found(format!("key '{key}'"))),
        })
    }

    fn key_set(&self) -> Result<BTreeSet<String>> {
        self.with_swept_entries(|entries| entries.keys().cloned().collect())
    }

    fn contains_key(&self, key: &str) -> Result<bool> {
        self.with_valid_entries(|entries, now| Ok(lookup(entries, key, now).is_some()))
    }

    fn contains_value(&self, value: &Value) -> Result<bool> {
        self.with_swept_entries(|entries| entries.values().any(|entry| &entry.value == value))
    }

    fn entry_set(&self) -> Result<Vec<(String, Value)>> {
        self.with_swept_entries(|entries| {
            let mut snapshot: Vec<(String, Value)> = entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.value.clone()))
                .collect();
            snapshot.sort_by(|a, b| a.0.cmp(&b.0));
            snapshot
        })
    }

    fn size(&self) -> Result<usize> {
        self.with_swept_entries(|entries| entries.len())
    }
}

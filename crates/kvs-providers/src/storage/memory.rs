//! Plain in-memory storage
//!
//! Non-expiring map bound to a named container. Implements only the storage
//! primitives; every bulk operation comes from the `Storage` defaults.

use super::binding::Binding;
use crate::clock::SystemClock;
use crate::registry::ContainerRegistry;
use kvs_domain::constants::MEMORY_PROVIDER_NAME;
use kvs_domain::error::{Error, Result};
use kvs_domain::ports::{Clock, Storage};
use kvs_domain::value_objects::Entry;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Non-expiring in-memory storage
///
/// Entries never expire on this backend, whatever TTL they were written
/// with by an expiring handle aliasing the same container.
///
/// # Example
///
/// ```rust
/// use kvs_providers::{ContainerRegistry, MemoryStorage, Storage};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let registry = Arc::new(ContainerRegistry::new());
/// let a = MemoryStorage::new(Arc::clone(&registry), "shared");
/// let b = MemoryStorage::new(registry, "shared");
/// a.initialize().unwrap();
/// b.initialize().unwrap();
///
/// a.put("k", json!(1)).unwrap();
/// assert_eq!(b.get("k").unwrap(), Some(json!(1)));
/// ```
#[derive(Debug)]
pub struct MemoryStorage {
    binding: Binding,
    clock: Arc<dyn Clock>,
}

impl MemoryStorage {
    /// Create an uninitialized handle for `name`
    pub fn new(registry: Arc<ContainerRegistry>, name: impl Into<String>) -> Self {
        Self::with_clock(registry, name, Arc::new(SystemClock::new()))
    }

    /// Create an uninitialized handle stamping entries with `clock`
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
}

impl Storage for MemoryStorage {
    fn initialize(&self) -> Result<()> {
        self.binding.initialize(MEMORY_PROVIDER_NAME)
    }

    fn shutdown(&self) -> Result<()> {
        self.binding.shutdown(MEMORY_PROVIDER_NAME)
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
        MEMORY_PROVIDER_NAME
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        let container = self.binding.container()?;
        let entries = container.lock();
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn put(&self, key: &str, value: Value) -> Result<Value> {
        let container = self.binding.container()?;
        let entry = Entry::new(value.clone(), self.clock.now_secs());
        container.lock().insert(key.to_string(), entry);
        Ok(value)
    }

    fn remove(&self, key: &str) -> Result<Value> {
        let container = self.binding.container()?;
        let removed = container.lock().remove(key);
        removed
            .map(|entry| entry.value)
            .ok_or_else(|| Error::not_found(format!("key '{key}'")))
    }

    fn key_set(&self) -> Result<BTreeSet<String>> {
        let container = self.binding.container()?;
        let entries = container.lock();
        Ok(entries.keys().cloned().collect())
    }
}

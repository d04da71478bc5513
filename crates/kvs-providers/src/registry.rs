//! Named container registry
//!
//! Maps storage names to their backing [`Container`]. Handles opened under
//! the same name resolve to the same container and therefore alias the same
//! data set.
//!
//! Only structural changes (create, rename, remove) go through the registry
//! lock. Reads and writes of entries operate directly on the container a
//! handle already holds, behind that container's own lock.

use kvs_domain::value_objects::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Entries of one container
pub type EntryMap = HashMap<String, Entry>;

/// Backing key/entry map for one storage name
///
/// A single mutex guards the whole map. Expiring reads evict, so every
/// operation takes it exclusively.
#[derive(Debug, Default)]
pub struct Container {
    entries: Mutex<EntryMap>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the entry map
    ///
    /// A poisoned lock is recovered: every mutation of the map is a single
    /// `HashMap` call, so a panicking holder cannot leave it half-updated.
    pub fn lock(&self) -> MutexGuard<'_, EntryMap> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the container holds no entry at all
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry that is no longer valid at `now`
    ///
    /// Returns the number of evicted entries.
    pub fn purge_expired(&self, now: i64) -> usize {
        purge_expired(&mut self.lock(), now)
    }
}

/// Evict the invalid entries of an already locked map
pub(crate) fn purge_expired(entries: &mut EntryMap, now: i64) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.is_valid_at(now));
    before - entries.len()
}

/// Process-wide name to container mapping
///
/// Constructed once and shared by `Arc` between every provider and handle
/// that must see the same data.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: Mutex<HashMap<String, Arc<Container>>>,
}

impl ContainerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Container>>> {
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the container registered under `name`, creating it if absent
    ///
    /// The check and the insertion happen under one lock, so concurrent
    /// first access never yields two containers for the same name.
    pub fn get_or_create(&self, name: &str) -> Arc<Container> {
        let mut containers = self.lock();
        if let Some(container) = containers.get(name) {
            return Arc::clone(container);
        }
        debug!(storage = name, "Creating storage container");
        let container = Arc::new(Container::new());
        containers.insert(name.to_string(), Arc::clone(&container));
        container
    }

    /// Container registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<Arc<Container>> {
        self.lock().get(name).cloned()
    }

    /// Whether a container is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Detach and return the container registered under `name`
    pub fn remove(&self, name: &str) -> Option<Arc<Container>> {
        let removed = self.lock().remove(name);
        if removed.is_some() {
            debug!(storage = name, "Removed storage container");
        }
        removed
    }

    /// Move the binding of `old_name` to `new_name`
    ///
    /// Any binding under `old_name` is removed. `new_name` is then bound to
    /// `current` when given, otherwise to whatever was found under
    /// `old_name`. Returns the container now bound under `new_name`.
    pub fn rename(
        &self,
        old_name: &str,
        new_name: &str,
        current: Option<Arc<Container>>,
    ) -> Option<Arc<Container>> {
        let mut containers = self.lock();
        let previous = containers.remove(old_name);
        let bound = current.or(previous)?;
        containers.insert(new_name.to_string(), Arc::clone(&bound));
        debug!(from = old_name, to = new_name, "Renamed storage container");
        Some(bound)
    }

    /// Sorted snapshot of the registered names
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of every registered container
    pub fn containers(&self) -> Vec<(String, Arc<Container>)> {
        self.lock()
            .iter()
            .map(|(name, container)| (name.clone(), Arc::clone(container)))
            .collect()
    }

    /// Number of registered containers
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no container is registered
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

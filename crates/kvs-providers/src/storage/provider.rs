//! Storage providers for the in-memory backends
//!
//! A provider opens named storages of one backend kind over a shared
//! [`ContainerRegistry`]. Opening a name twice returns the same handle;
//! removing a storage shuts its handle down and detaches its container.
//! Removing a name that was never created is a no-op.

use super::{ExpiringStorage, MemoryStorage};
use crate::clock::SystemClock;
use crate::registry::ContainerRegistry;
use kvs_domain::constants::{EXPIRING_PROVIDER_NAME, MEMORY_PROVIDER_NAME};
use kvs_domain::error::{Error, Result};
use kvs_domain::ports::{Clock, Storage, StorageProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Handles opened through one provider
///
/// Handles are matched by their current name, so a handle renamed after
/// opening is found under its new name only.
#[derive(Debug, Default)]
struct OpenHandles {
    handles: Mutex<Vec<Arc<dyn Storage>>>,
}

impl OpenHandles {
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn Storage>>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the open handle named `name` or create, initialize and record one
    ///
    /// Handles shut down since they were recorded are forgotten.
    fn open(
        &self,
        name: &str,
        create: impl FnOnce() -> Arc<dyn Storage>,
    ) -> Result<Arc<dyn Storage>> {
        if name.is_empty() {
            return Err(Error::invalid_argument("storage name cannot be empty"));
        }
        let mut handles = self.lock();
        handles.retain(|handle| handle.is_initialized());
        if let Some(handle) = handles.iter().find(|handle| handle.name() == name) {
            return Ok(Arc::clone(handle));
        }
        let handle = create();
        handle.initialize()?;
        handles.push(Arc::clone(&handle));
        Ok(handle)
    }

    /// Shut down every handle currently named `name` and detach its container
    fn close(&self, registry: &ContainerRegistry, name: &str, backend: &str) -> Result<()> {
        let closing: Vec<Arc<dyn Storage>> = {
            let mut handles = self.lock();
            let (closing, kept): (Vec<_>, Vec<_>) = handles
                .drain(..)
                .partition(|handle| handle.name() == name);
            *handles = kept;
            closing
        };
        for handle in &closing {
            handle.shutdown()?;
        }
        let container = registry.remove(name);
        if closing.is_empty() && container.is_none() {
            debug!(storage = name, backend, "Remove of unknown storage ignored");
        } else {
            debug!(storage = name, backend, "Storage removed");
        }
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .lock()
            .iter()
            .filter(|handle| handle.is_initialized())
            .map(|handle| handle.name())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Provider of non-expiring [`MemoryStorage`] handles
#[derive(Debug)]
pub struct MemoryStorageProvider {
    registry: Arc<ContainerRegistry>,
    clock: Arc<dyn Clock>,
    open: OpenHandles,
}

impl MemoryStorageProvider {
    /// Create a provider over `registry`
    pub fn new(registry: Arc<ContainerRegistry>) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock::new()))
    }

    /// Create a provider whose storages stamp entries with `clock`
    pub fn with_clock(registry: Arc<ContainerRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            open: OpenHandles::default(),
        }
    }

    /// Registry the storages of this provider are bound in
    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn get_storage(&self, name: &str) -> Result<Arc<dyn Storage>> {
        self.open.open(name, || {
            let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::with_clock(
                Arc::clone(&self.registry),
                name,
                Arc::clone(&self.clock),
            ));
            storage
        })
    }

    fn remove_storage(&self, name: &str) -> Result<()> {
        self.open.close(&self.registry, name, MEMORY_PROVIDER_NAME)
    }

    fn storage_names(&self) -> Vec<String> {
        self.open.names()
    }

    fn provider_name(&self) -> &str {
        MEMORY_PROVIDER_NAME
    }
}

/// Provider of TTL-based [`ExpiringStorage`] handles
#[derive(Debug)]
pub struct ExpiringStorageProvider {
    registry: Arc<ContainerRegistry>,
    clock: Arc<dyn Clock>,
    open: OpenHandles,
}

impl ExpiringStorageProvider {
    /// Create a provider over `registry` using the system clock
    pub fn new(registry: Arc<ContainerRegistry>) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock::new()))
    }

    /// Create a provider whose storages read time from `clock`
    pub fn with_clock(registry: Arc<ContainerRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            open: OpenHandles::default(),
        }
    }

    /// Registry the storages of this provider are bound in
    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }

    /// Clock the storages of this provider read time from
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

impl StorageProvider for ExpiringStorageProvider {
    fn get_storage(&self, name: &str) -> Result<Arc<dyn Storage>> {
        self.open.open(name, || {
            let storage: Arc<dyn Storage> = Arc::new(ExpiringStorage::with_clock(
                Arc::clone(&self.registry),
                name,
                Arc::clone(&self.clock),
            ));
            storage
        })
    }

    fn remove_storage(&self, name: &str) -> Result<()> {
        self.open.close(&self.registry, name, EXPIRING_PROVIDER_NAME)
    }

    fn storage_names(&self) -> Vec<String> {
        self.open.names()
    }

    fn provider_name(&self) -> &str {
        EXPIRING_PROVIDER_NAME
    }
}

//! Storage provider factory
//!
//! Creates the provider for the configured backend kind over a shared
//! registry. Call sites only ever see `Arc<dyn StorageProvider>`, so
//! switching backend is purely a configuration change.

use crate::config::StorageConfig;
use kvs_domain::error::{Error, Result};
use kvs_domain::ports::{Clock, StorageProvider};
use kvs_domain::value_objects::BackendKind;
use kvs_providers::{ContainerRegistry, ExpiringStorageProvider, MemoryStorageProvider};
use std::sync::Arc;
use tracing::info;

/// Factory for storage providers sharing one registry and clock
#[derive(Debug, Clone)]
pub struct StorageProviderFactory {
    registry: Arc<ContainerRegistry>,
    clock: Arc<dyn Clock>,
}

impl StorageProviderFactory {
    /// Create a factory over `registry` reading time from `clock`
    pub fn new(registry: Arc<ContainerRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// Create the provider selected by `config`
    pub fn create_from_config(&self, config: &StorageConfig) -> Result<Arc<dyn StorageProvider>> {
        self.create(config.backend)
    }

    /// Create a provider for `kind`
    ///
    /// Remote kinds are served by external adapters and fail with
    /// `BackendUnavailable`.
    pub fn create(&self, kind: BackendKind) -> Result<Arc<dyn StorageProvider>> {
        let provider: Arc<dyn StorageProvider> = match kind {
            BackendKind::Memory => Arc::new(MemoryStorageProvider::with_clock(
                Arc::clone(&self.registry),
                Arc::clone(&self.clock),
            )),
            BackendKind::Expiring => Arc::new(ExpiringStorageProvider::with_clock(
                Arc::clone(&self.registry),
                Arc::clone(&self.clock),
            )),
            BackendKind::Redis | BackendKind::Memcached => {
                return Err(Error::backend_unavailable(kind.to_string()));
            }
        };
        info!(backend = %kind, "Storage provider created");
        Ok(provider)
    }

    /// Registry shared by every provider of this factory
    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }
}

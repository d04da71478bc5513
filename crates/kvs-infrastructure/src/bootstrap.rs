//! Storage Bootstrap - composition root
//!
//! Builds the single container registry, the clock, the configured storage
//! provider and (when enabled) the background expiry sweeper.
//!
//! ```text
//! AppConfig → StorageProviderFactory → Arc<dyn StorageProvider>
//!                    ↑                        ↓
//!           Arc<ContainerRegistry> ←── named containers
//!                    ↑
//!             ExpirySweeper (optional)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = StorageContext::init(config)?;
//!
//! let sessions = context.storage("sessions")?;
//! sessions.put_with_ttl("u1", json!({"name": "bob"}), 1800)?;
//!
//! context.shutdown();
//! ```

use crate::config::AppConfig;
use crate::storage::{ExpirySweeper, StorageProviderFactory, TypedStorage};
use kvs_domain::error::{Error, Result};
use kvs_domain::ports::{Clock, Storage, StorageProvider};
use kvs_providers::{ContainerRegistry, SystemClock};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Application storage context
pub struct StorageContext {
    config: Arc<AppConfig>,
    registry: Arc<ContainerRegistry>,
    clock: Arc<dyn Clock>,
    provider: Arc<dyn StorageProvider>,
    sweeper: Option<CancellationToken>,
}

impl StorageContext {
    /// Build the context with the system clock
    pub fn init(config: AppConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Build the context reading time from `clock`
    ///
    /// Starting the sweeper requires a running tokio runtime.
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let registry = Arc::new(ContainerRegistry::new());
        let factory = StorageProviderFactory::new(Arc::clone(&registry), Arc::clone(&clock));
        let provider = factory.create_from_config(&config.storage)?;

        let sweeper = match config.storage.sweep_interval() {
            Some(interval) => {
                if tokio::runtime::Handle::try_current().is_err() {
                    return Err(Error::config(
                        "Expiry sweeper requires a running tokio runtime",
                    ));
                }
                let token = CancellationToken::new();
                ExpirySweeper::new(Arc::clone(&registry), Arc::clone(&clock), interval)
                    .spawn(token.clone());
                Some(token)
            }
            None => None,
        };

        info!(
            backend = %config.storage.backend,
            sweeper = sweeper.is_some(),
            "Storage context initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            registry,
            clock,
            provider,
            sweeper,
        })
    }

    /// Loaded configuration
    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// Registry shared by every storage of this context
    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }

    /// Clock used for expiration
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Configured storage provider
    pub fn provider(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.provider)
    }

    /// Open (or create) the named storage
    pub fn storage(&self, name: &str) -> Result<Arc<dyn Storage>> {
        self.provider.get_storage(name)
    }

    /// Open the named storage behind a typed wrapper using the default TTL
    pub fn typed_storage(&self, name: &str) -> Result<TypedStorage> {
        Ok(TypedStorage::with_default_ttl(
            self.storage(name)?,
            self.config.storage.default_ttl_secs,
        ))
    }

    /// Destroy the named storage
    pub fn remove_storage(&self, name: &str) -> Result<()> {
        self.provider.remove_storage(name)
    }

    /// Whether the background sweeper is running
    pub fn sweeper_running(&self) -> bool {
        self.sweeper
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Stop background work and shut down every open storage
    pub fn shutdown(&self) -> Result<()> {
        if let Some(token) = &self.sweeper {
            token.cancel();
        }
        for name in self.provider.storage_names() {
            self.provider.get_storage(&name)?.shutdown()?;
        }
        info!("Storage context shut down");
        Ok(())
    }
}

impl Drop for StorageContext {
    fn drop(&mut self) {
        if let Some(token) = &self.sweeper {
            token.cancel();
        }
    }
}

impl std::fmt::Debug for StorageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageContext")
            .field("backend", &self.config.storage.backend)
            .field("storages", &self.registry.names())
            .field("sweeper_running", &self.sweeper_running())
            .finish()
    }
}

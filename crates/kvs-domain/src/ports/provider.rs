//! Storage Provider Port
//!
//! Factory for named storage instances of one backend kind. Providers of
//! different backends are interchangeable behind this trait, so switching
//! backend is a configuration change with no impact on call sites.

use crate::error::Result;
use crate::ports::storage::Storage;
use std::sync::Arc;

/// Storage Provider Port
///
/// # Example
///
/// ```ignore
/// let sessions = provider.get_storage("sessions")?;
/// sessions.put("u1", json!({"name": "bob"}))?;
///
/// // Destroys the container; other handles keep their detached reference
/// provider.remove_storage("sessions")?;
/// ```
pub trait StorageProvider: Send + Sync + std::fmt::Debug {
    /// Open (or create and initialize) the storage bound to `name`
    ///
    /// Idempotent: opening the same name twice returns the same handle.
    fn get_storage(&self, name: &str) -> Result<Arc<dyn Storage>>;

    /// Destroy the named storage and its container
    ///
    /// Removing a name that was never created is a no-op.
    fn remove_storage(&self, name: &str) -> Result<()>;

    /// Names of the storages currently open through this provider
    fn storage_names(&self) -> Vec<String>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

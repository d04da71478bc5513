//! Typed access to a storage handle
//!
//! Serializes values through serde_json so collaborators can store their
//! own types without handling `serde_json::Value` directly.

use kvs_domain::error::Result;
use kvs_domain::ports::Storage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Typed wrapper over a storage handle
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Session { user: String }
///
/// let sessions = TypedStorage::new(context.storage("sessions")?);
/// sessions.put_as_with_ttl("u1", &Session { user: "bob".into() }, 1800)?;
/// let session: Option<Session> = sessions.get_as("u1")?;
/// ```
#[derive(Debug, Clone)]
pub struct TypedStorage {
    storage: Arc<dyn Storage>,
    default_ttl_secs: i64,
}

impl TypedStorage {
    /// Wrap a handle; `put_as` stores without expiration
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_default_ttl(storage, 0)
    }

    /// Wrap a handle; `put_as` applies `default_ttl_secs`
    pub fn with_default_ttl(storage: Arc<dyn Storage>, default_ttl_secs: i64) -> Self {
        Self {
            storage,
            default_ttl_secs,
        }
    }

    /// Underlying handle
    pub fn inner(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// TTL applied by `put_as`
    pub fn default_ttl_secs(&self) -> i64 {
        self.default_ttl_secs
    }

    /// Look up and deserialize a value
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.storage.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value with the default TTL
    pub fn put_as<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.put_as_with_ttl(key, value, self.default_ttl_secs)
    }

    /// Serialize and store a value with an explicit TTL
    pub fn put_as_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl_secs: i64) -> Result<()> {
        let value = serde_json::to_value(value)?;
        if ttl_secs > 0 {
            self.storage.put_with_ttl(key, value, ttl_secs)?;
        } else {
            self.storage.put(key, value)?;
        }
        Ok(())
    }

    /// Remove a key and deserialize its prior value
    pub fn remove_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.storage.remove(key)?;
        Ok(serde_json::from_value(value)?)
    }
}

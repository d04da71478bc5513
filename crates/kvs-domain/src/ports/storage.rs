//! Storage Port
//!
//! The storage contract every backend satisfies. Backends implement a small
//! set of primitives; the bulk and derived operations are default methods
//! built only from those primitives, so a new backend needs nothing more
//! than `get`, `put`, `remove`, `key_set` and the lifecycle hooks.
//!
//! ## Not-found signalling
//!
//! Misses on the hot read path are values, not errors: `get` returns
//! `Ok(None)` and `contains_key` returns `Ok(false)`. Only `remove` requires
//! the entry to be present and fails with [`Error::NotFound`] otherwise.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Storage Port
///
/// Handles are bound to a named container. Several handles opened under the
/// same name share the same container, so writes through one are visible
/// through all of them.
///
/// # Example
///
/// ```ignore
/// use kvs_domain::ports::Storage;
/// use serde_json::json;
///
/// storage.put("a", json!(1))?;
/// storage.put_with_ttl("session", json!({"user": "bob"}), 30)?;
///
/// let found = storage.get_all(&["a", "missing"])?;
/// assert_eq!(found["a"], Some(json!(1)));
/// assert_eq!(found["missing"], None);
/// ```
pub trait Storage: Send + Sync + std::fmt::Debug {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Bind the handle to its named container, creating it when absent
    ///
    /// Idempotent.
    fn initialize(&self) -> Result<()>;

    /// Release backend resources
    ///
    /// Idempotent. Data operations fail with `InvalidState` afterwards until
    /// the handle is initialized again.
    fn shutdown(&self) -> Result<()>;

    /// Whether the handle is currently bound to a container
    fn is_initialized(&self) -> bool;

    /// Name the handle is registered under
    fn name(&self) -> String;

    /// Rename the handle, moving its registry binding to `name`
    fn set_name(&self, name: &str) -> Result<()>;

    /// Get the name/identifier of the backend implementation
    fn provider_name(&self) -> &str;

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Look up a value; `None` when absent
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a value without expiration and return the stored value
    fn put(&self, key: &str, value: Value) -> Result<Value>;

    /// Store a value that expires `ttl_secs` seconds after insertion
    ///
    /// Backends without expiration support store the value permanently.
    fn put_with_ttl(&self, key: &str, value: Value, _ttl_secs: i64) -> Result<Value> {
        self.put(key, value)
    }

    /// Remove a key and return its prior value
    ///
    /// Fails with `NotFound` when the key is absent.
    fn remove(&self, key: &str) -> Result<Value>;

    /// Snapshot of the keys currently stored
    fn key_set(&self) -> Result<BTreeSet<String>>;

    // ------------------------------------------------------------------
    // Derived operations
    // ------------------------------------------------------------------

    /// Look up every requested key
    ///
    /// The result holds every requested key; missing ones map to `None`.
    fn get_all(&self, keys: &[&str]) -> Result<HashMap<String, Option<Value>>> {
        let mut found = HashMap::with_capacity(keys.len());
        for key in keys {
            found.insert((*key).to_string(), self.get(key)?);
        }
        Ok(found)
    }

    /// Whether a value is stored under `key`
    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.key_set()?.contains(key))
    }

    /// Whether any key holds `value`
    fn contains_value(&self, value: &Value) -> Result<bool> {
        Ok(self.values()?.iter().any(|stored| stored == value))
    }

    /// Store every entry with sequential `put` calls
    ///
    /// There is no atomicity across keys.
    fn put_all(&self, entries: HashMap<String, Value>) -> Result<()> {
        for (key, value) in entries {
            self.put(&key, value)?;
        }
        Ok(())
    }

    /// Remove every key through `remove`
    ///
    /// Keys that disappear between the snapshot and their removal are
    /// skipped.
    fn clear(&self) -> Result<()> {
        for key in self.key_set()? {
            match self.remove(&key) {
                Ok(_) => {}
                Err(Error::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Materialized snapshot of all present entries
    fn entry_set(&self) -> Result<Vec<(String, Value)>> {
        let keys = self.key_set()?;
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let mut entries: Vec<(String, Value)> = self
            .get_all(&refs)?
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    /// Snapshot of all present values, ordered by key
    fn values(&self) -> Result<Vec<Value>> {
        Ok(self.entry_set()?.into_iter().map(|(_, v)| v).collect())
    }

    /// Number of stored keys
    fn size(&self) -> Result<usize> {
        Ok(self.key_set()?.len())
    }

    /// Whether no key is stored
    fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }
}

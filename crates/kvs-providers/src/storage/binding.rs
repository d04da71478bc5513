//! Handle to container binding shared by the in-memory backends

use crate::registry::{Container, ContainerRegistry};
use kvs_domain::error::{Error, Result};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug)]
struct BindingState {
    name: String,
    container: Option<Arc<Container>>,
}

/// Name plus (once initialized) the container a handle operates on
#[derive(Debug)]
pub(crate) struct Binding {
    registry: Arc<ContainerRegistry>,
    state: RwLock<BindingState>,
}

impl Binding {
    pub(crate) fn new(registry: Arc<ContainerRegistry>, name: impl Into<String>) -> Self {
        Self {
            registry,
            state: RwLock::new(BindingState {
                name: name.into(),
                container: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BindingState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BindingState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn name(&self) -> String {
        self.read().name.clone()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.read().container.is_some()
    }

    pub(crate) fn initialize(&self, backend: &str) -> Result<()> {
        let mut state = self.write();
        if state.container.is_none() {
            let container = self.registry.get_or_create(&state.name);
            state.container = Some(container);
            debug!(storage = %state.name, backend, "Storage initialized");
        }
        Ok(())
    }

    pub(crate) fn shutdown(&self, backend: &str) -> Result<()> {
        let mut state = self.write();
        if state.container.take().is_some() {
            debug!(storage = %state.name, backend, "Storage shut down");
        }
        Ok(())
    }

    /// Relocate the registry binding and adopt the new name
    ///
    /// The held container (if any) stays the one this handle operates on.
    pub(crate) fn rename(&self, new_name: &str) -> Result<()> {
        if new_name.is_empty() {
            return Err(Error::invalid_argument("storage name cannot be empty"));
        }
        let mut state = self.write();
        self.registry
            .rename(&state.name, new_name, state.container.clone());
        state.name = new_name.to_string();
        Ok(())
    }

    /// Container this handle operates on
    pub(crate) fn container(&self) -> Result<Arc<Container>> {
        let state = self.read();
        state.container.clone().ok_or_else(|| {
            Error::invalid_state(format!("storage '{}' is not initialized", state.name))
        })
    }
}

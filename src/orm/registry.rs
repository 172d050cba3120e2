use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::common::enums::bootstrap_error::BootstrapError;
use crate::orm::structs::entity_manager::EntityManager;

/// Process-wide slot for the entity manager. Initialize-once, read-many:
/// set exactly once on the boot path, never torn down.
pub static ENTITY_MANAGER: OnceCell<Arc<EntityManager>> = OnceCell::new();

pub fn initialize(manager: Arc<EntityManager>) -> Result<(), BootstrapError> {
    ENTITY_MANAGER.set(manager).map_err(|_| BootstrapError::AlreadyInitialized)
}

pub fn resolve() -> Result<Arc<EntityManager>, BootstrapError> {
    match ENTITY_MANAGER.get() {
        None => Err(BootstrapError::NotInitialized),
        Some(manager) => Ok(manager.clone()),
    }
}

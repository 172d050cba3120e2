//! Entity manager bootstrap module.
//!
//! Selects the entity metadata mapper strategy, constructs the
//! [`structs::entity_manager::EntityManager`] for the configured default
//! connection and publishes it into the process-wide
//! [`registry`] slot. The whole module runs once on the boot path;
//! both translation errors and pool failures abort startup.

/// ORM enumerations (mapper strategies).
pub mod enums;

/// ORM data structures.
pub mod structs;

/// Implementation blocks for ORM types.
pub mod impls;

/// Initialize-once registry slot for the entity manager.
pub mod registry;

/// Registrar boot path.
#[allow(clippy::module_inception)]
pub mod orm;

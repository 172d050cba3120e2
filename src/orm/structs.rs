//! ORM data structures.

/// Entity metadata mapper configuration.
pub mod metadata_config;

/// Process-wide entity manager handle.
pub mod entity_manager;

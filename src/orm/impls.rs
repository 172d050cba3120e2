//! Implementation blocks for ORM types.

/// Mapper kind parsing and display.
pub mod mapper_kind;

/// Metadata configuration builders and strategy selection.
pub mod metadata_config;

/// Entity manager construction and accessors.
pub mod entity_manager;

//! Implementation blocks for database types.

/// Driver kind parsing and display.
pub mod driver_kind;

/// Descriptor-to-template translation and parameter map rendering.
pub mod connection_params;

/// Connection pool opening per engine.
pub mod database_connector;

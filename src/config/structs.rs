//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Generic per-connection descriptor (`[connections.<name>]`).
pub mod connection_config;

/// Entity metadata mapper settings (`[orm]`).
pub mod orm_config;

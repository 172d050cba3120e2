//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the bridge
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level**: Console log verbosity
//! - **default**: Name of the default connection
//! - **connections**: One generic connection descriptor per named connection
//! - **orm**: Entity metadata mapper selection (mapper kind, entity paths, debug flag)
//!
//! # Example
//!
//! ```rust,ignore
//! use doctrine_bridge::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, writing defaults when absent
//! let config = Configuration::load_from_file(true)?;
//! ```

/// Configuration enumerations (loading errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

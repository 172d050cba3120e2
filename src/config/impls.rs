//! Implementation blocks for configuration loading/saving.

/// Configuration defaults, loading, saving and validation.
pub mod configuration;

/// Configuration error formatting.
pub mod configuration_error;

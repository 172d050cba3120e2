//! Configuration enumeration types.

/// Configuration loading errors.
pub mod configuration_error;

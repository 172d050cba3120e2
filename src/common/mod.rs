//! Common utilities and shared functionality.
//!
//! Holds the error types shared across the bridge and the logging setup
//! used by the binary.

/// Common data structures (errors).
pub mod structs;

/// Common enumerations (setup and bootstrap errors).
pub mod enums;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

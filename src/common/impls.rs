//! Implementation blocks for common types.

/// CustomError construction and formatting.
pub mod custom_error;

//! Common enumeration types.

/// Translation errors (invalid driver, invalid mapper).
pub mod setup_error;

/// Boot sequence errors.
pub mod bootstrap_error;

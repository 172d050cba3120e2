//! Common data structures.

/// Message-carrying error used by the configuration loader.
pub mod custom_error;

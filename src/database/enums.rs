//! Database enumeration types.

/// Supported database driver kinds (sqlite, mysql, pgsql, sqlsrv).
pub mod driver_kind;

//! Connection configuration translation and database connectivity.
//!
//! This module is the core of the bridge: it parses the `driver` field of a
//! generic connection descriptor into a [`enums::driver_kind::DriverKind`]
//! and translates the descriptor into the driver's fixed parameter template
//! (`pdo_sql`, `pdo_mysql`, `pdo_pgsql`, `pdo_sqlsrv`). Translation is a
//! pure function of its input; the resulting
//! [`structs::connection_params::ConnectionParams`] render as ordered maps
//! with exactly the template's key set, defaulted fields included.
//!
//! Connection pools for the sqlx-backed engines (SQLite, MySQL, PostgreSQL)
//! are opened through [`structs::database_connector::DatabaseConnector`].

/// Database enumerations (driver kinds).
pub mod enums;

/// Parameter templates and connector structures.
pub mod structs;

/// Implementation blocks for translation and pool opening.
pub mod impls;

#[cfg(test)]
mod tests;

//! Database parameter and connector structures.

/// Driver-specific connection parameters, one variant per supported driver.
pub mod connection_params;

/// SQLite parameter template (`pdo_sql`).
pub mod sqlite_params;

/// MySQL/MariaDB parameter template (`pdo_mysql`).
pub mod mysql_params;

/// PostgreSQL parameter template (`pdo_pgsql`).
pub mod pgsql_params;

/// Microsoft SQL Server parameter template (`pdo_sqlsrv`).
pub mod sqlsrv_params;

/// Connection pool holder for the sqlx-backed engines.
pub mod database_connector;

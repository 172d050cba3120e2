//! # Doctrine Bridge
//!
//! A configuration bridge that wires framework-style database settings to a
//! Doctrine-style ORM entity manager.
//!
//! ## Overview
//!
//! The bridge reads a TOML configuration of named, driver-keyed connection
//! descriptors, translates each into the parameter template its database
//! abstraction layer expects (`pdo_sql`, `pdo_mysql`, `pdo_pgsql`,
//! `pdo_sqlsrv`), selects an entity metadata mapper strategy (annotation,
//! docblock, xml or yaml) and constructs a single entity manager handle for
//! the default connection, published into an initialize-once registry.
//!
//! ## Features
//!
//! - **Bit-exact translation**: parameter key sets and defaults reproduce
//!   the DBAL contract per driver, missing inputs rendered as explicit nulls
//! - **Exhaustive driver dispatch**: driver strings parse into an enum once,
//!   every later branch is compile-time checked
//! - **Connection pools**: sqlx-backed pools for SQLite, MySQL and
//!   PostgreSQL with debug statement logging
//! - **Fail-fast boot**: unrecognized drivers or mapper names abort startup,
//!   no fallbacks and no retries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use doctrine_bridge::config::structs::configuration::Configuration;
//! use doctrine_bridge::orm::orm::register;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let manager = register(config).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared error types and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Connection translation and pool opening
//! - [`orm`] - Mapper strategy, entity manager and registry
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the setup and bootstrap error types used across the bridge
/// and the fern logging setup used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Declares the named connection descriptors, the default connection and
/// the entity metadata mapper section.
pub mod config;

/// Connection translation and database connectivity.
///
/// Translates generic connection descriptors into driver-specific parameter
/// templates and opens sqlx connection pools for the supported engines.
pub mod database;

/// Entity manager bootstrap module.
///
/// Selects the metadata mapper strategy, constructs the entity manager for
/// the default connection and publishes it into the registry slot.
pub mod orm;

/// CLI argument parsing.
///
/// Defines the command-line interface of the bridge binary, including
/// default configuration generation.
pub mod structs;

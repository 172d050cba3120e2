use thiserror::Error;
use crate::common::enums::setup_error::SetupError;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),
    #[error("Unknown connection [{0}]")]
    UnknownConnection(String),
    #[error("No pool support for engine [{0}]")]
    UnsupportedEngine(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Entity manager already initialized")]
    AlreadyInitialized,
    #[error("Entity manager not initialized")]
    NotInitialized,
}

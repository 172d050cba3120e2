use thiserror::Error;

/// Startup-time translation errors. These are the only two failure modes
/// of the configuration translation itself; both abort the boot sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Invalid driver [{0}]")]
    InvalidDriver(String),
    #[error("Invalid mapper [{0}]")]
    InvalidMapper(String),
}

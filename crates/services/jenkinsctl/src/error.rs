//! Command-level error types.

/// Command-level errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Arguments failed validation before any request was made.
    #[error("{0}")]
    Usage(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] jenkinsctl_config::error::Error),

    /// A server operation failed.
    #[error(transparent)]
    Server(#[from] jenkinsctl_sdk::error::Error),
}

/// Command-level result type.
pub type Result<T> = core::result::Result<T, Error>;

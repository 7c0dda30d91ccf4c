//! Configuration error types.

use std::path::PathBuf;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Home directory variable is unset or empty, so the default
    /// configuration path cannot be resolved.
    #[error("HOME is not set; cannot locate the default configuration file")]
    NoHome,

    /// Configuration file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Configuration file exists but its contents are unusable.
    #[error("malformed configuration: {0}")]
    Malformed(String),

    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}

//! Request error types.

/// Request errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Request could not be built or sent.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Endpoint URL is invalid.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

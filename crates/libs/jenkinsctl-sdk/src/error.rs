//! SDK error types.

use reqwest::StatusCode;

/// SDK errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Server could not be reached.
    #[error("server unreachable: {server}")]
    Unreachable {
        /// Server URL the connection attempt was made against.
        server: String,
        #[source]
        source: reqwest::Error,
    },

    /// Credentials were rejected by the server.
    #[error("authentication failed: check user and token")]
    Unauthorized,

    /// Remote entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Server answered with a non-success status.
    #[error("request failed with status {status} for {url}")]
    RequestFailed {
        /// HTTP status the server answered with.
        status: StatusCode,
        /// Request URL.
        url: String,
    },

    /// Transport-level failure.
    #[error(transparent)]
    Transport(#[from] jenkinsctl_requests::error::Error),

    /// I/O operation failed.
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// JSON deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

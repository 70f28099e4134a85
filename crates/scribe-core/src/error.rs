//! Error types for scribe-core

use thiserror::Error;

/// Result type alias using scribe-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scribe-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The notes API could not be reached or answered with a failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Invalid client configuration (e.g. malformed base URL)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Failure of a single HTTP round trip against the notes API.
///
/// Network failures, non-success statuses and undecodable bodies are all
/// reported through this type and are not classified further.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notes API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode notes API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Request(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Transport(TransportError::Decode(error))
    }
}

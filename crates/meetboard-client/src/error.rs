//! Client error types.

use meetboard_core::TracingError;
use meetboard_providers::SourceError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The calendar source failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Terminal or stdout failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be set up.
    #[error("tracing error: {0}")]
    Tracing(#[from] TracingError),
}

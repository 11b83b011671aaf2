//! HTTP boundary error type

use thiserror::Error;

/// Errors raised at the HTTP boundary.
///
/// The variants follow the failure taxonomy of a submission: the request never
/// got an answer (`RequestFailed`, `Timeout`), the service answered with a
/// failure status (`HttpError`), or the answer could not be decoded
/// (`ParseError`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

//! Error types for the Gemini client

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AiError>;

/// Errors produced by the generative service boundary
///
/// Callers in the application core are expected to catch these, log them,
/// and fall back to a safe default; nothing in this enum should ever
/// surface to an end user as a crash.
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed into the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A structured response did not satisfy the requested schema
    #[error("response violates the requested schema: {0}")]
    SchemaViolation(String),

    /// The response carried no candidate content to extract
    #[error("response carried no usable content")]
    MissingContent,

    /// Client configuration problem (missing API key, bad base URL)
    #[error("configuration error: {0}")]
    Config(String),
}

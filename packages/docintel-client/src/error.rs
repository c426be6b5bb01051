//! Error types for the document-extraction API client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Document-extraction API client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error (missing base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is derived from the error body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

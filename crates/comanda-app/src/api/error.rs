//! Error types for the HTTP gateway.

use thiserror::Error;

/// Errors from the outbound order endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decoding failure from the HTTP client.
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request rejected with status {0}")]
    Rejected(u16),
}

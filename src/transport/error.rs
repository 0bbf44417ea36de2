//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// Carries the underlying failure verbatim. Nothing at this layer is
/// retried; the caller decides what to do.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures and other errors raised before a response
    /// status was received.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response stream failed after the status line was received.
    #[error("Response stream error: {0}")]
    Stream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request URL could not be built or was rejected by the client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

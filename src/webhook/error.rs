//! Error types for webhook operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. Nothing in this
/// crate retries; callers decide how to react.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only produced when the underlying client was configured with a
    /// timeout; [`super::ReqwestClient::new`] sets none.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for [`super::WebhookClient`] operations.
///
/// An error object returned by the remote API (`{"code": .., "message": ..}`)
/// is not an error here: it parses as JSON and is returned as data.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body is not JSON.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status of the response
        status: http::StatusCode,
        /// Response body, if valid UTF-8
        body: Option<String>,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

//! Error types for the Personal.AI SDK
//!
//! This module provides the SDK error hierarchy, following Rust idioms with
//! the `thiserror` crate. HTTP status codes returned by the API map to
//! dedicated variants; transport and decoding failures have their own.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a Personal.AI SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Personal.AI SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// API returned a bad request error (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failed (401).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Permission denied (403).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded")]
    RateLimit {
        /// Time to wait before calling again, if provided by the API
        retry_after: Option<Duration>,
    },

    /// Internal server error (500+).
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// Generic API error for status codes not covered above.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Failed to decode the API response body.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// The Personal.AI API does not document a fixed error envelope, so the
    /// message is extracted loosely: a JSON body with a string `message`
    /// field wins, otherwise the raw body text is used.
    pub fn from_response(status: u16, body: &str, headers: &http::HeaderMap) -> Self {
        let message = extract_message(body);

        match status {
            400 => Error::BadRequest(message),
            401 => Error::Authentication(message),
            403 => Error::PermissionDenied(message),
            404 => Error::NotFound(message),
            429 => {
                let retry_after = headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);

                Error::RateLimit { retry_after }
            }
            s if s >= 500 => Error::InternalServerError(message),
            _ => Error::ApiError { status, message },
        }
    }
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

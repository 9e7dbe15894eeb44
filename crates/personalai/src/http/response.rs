//! HTTP response handling

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

/// HTTP response wrapper.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as a string.
    pub fn text(&self) -> Result<String, crate::error::Error> {
        String::from_utf8(self.body.clone())
            .map_err(|e| crate::error::Error::ResponseValidation(e.to_string()))
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, crate::error::Error> {
        serde_json::from_slice(&self.body).map_err(crate::error::Error::Serialization)
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if the response is an error (4xx or 5xx status).
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Parse a successful response, converting HTTP error statuses to SDK errors.
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T, crate::error::Error> {
        if self.is_error() {
            return Err(crate::error::Error::from_response(
                self.status.as_u16(),
                &self.text()?,
                &self.headers,
            ));
        }
        self.json()
    }

    /// Resolve the response into the API result contract shared by every
    /// endpoint: the body of a 2xx response is parsed as JSON and passed
    /// through verbatim, while a 4xx/5xx status is reported through
    /// `tracing` and collapsed into `Ok(None)`, the absent-result signal.
    ///
    /// A success response whose body is not valid JSON is an `Err`; the API
    /// contract promises JSON, so that is a decode fault, not an absent
    /// result.
    pub fn into_api_result(self) -> Result<Option<serde_json::Value>, crate::error::Error> {
        if self.is_error() {
            let status = self.status.as_u16();
            let body = String::from_utf8_lossy(&self.body);
            let error = crate::error::Error::from_response(status, &body, &self.headers);
            warn!(status, error = %error, "API returned an error status; no result");
            return Ok(None);
        }
        self.json().map(Some)
    }
}

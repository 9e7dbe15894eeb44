//! HTTP provider trait for abstracting the transport
//!
//! This module defines the `HttpProvider` trait which decouples the client
//! from the concrete HTTP transport, so transport configuration is an
//! explicit, injectable dependency (and tests or alternative backends can
//! substitute their own).

use crate::{
    error::Result,
    http::{Method, Response},
};
use async_trait::async_trait;
use std::fmt;

/// Provider trait for making HTTP requests to the API.
///
/// Implementations handle authentication headers, URL construction, and
/// request/response exchange for their backend. The SDK ships with
/// [`PersonalAiHttpProvider`](super::PersonalAiHttpProvider) for the hosted
/// Personal.AI API.
#[async_trait]
pub trait HttpProvider: Send + Sync + fmt::Debug {
    /// Make a request and return the raw response.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method (GET or POST)
    /// * `path` - API endpoint path (e.g., "memory" or "message")
    /// * `body` - Optional request body (will be serialized to JSON)
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the HTTP exchange
    /// fails at the transport level. An error *status* from the API is not a
    /// transport failure; it is reported through the returned [`Response`].
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<Response>;

    /// Get the provider name for debugging/logging.
    fn provider_name(&self) -> &'static str;

    /// Get the base URL for this provider (for debugging).
    fn base_url(&self) -> &str;

    /// Cast to `std::any::Any` for downcasting to concrete types.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Helper function to serialize a body to JSON bytes.
pub(crate) fn serialize_body(
    body: &(dyn erased_serde::Serialize + Send + Sync),
) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(crate::error::Error::Serialization)
}

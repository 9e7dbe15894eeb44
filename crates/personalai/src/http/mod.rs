//! HTTP transport layer
//!
//! This module provides the HTTP layer for the SDK. Transport configuration
//! (base URL, timeout, default headers) is explicit and injectable via the
//! [`HttpProvider`] trait rather than implicit global behavior.

pub use personal_ai_provider::{PersonalAiHttpProvider, PersonalAiHttpProviderBuilder};
pub use provider::HttpProvider;
pub use request::RequestBuilder;
pub use response::Response;

mod personal_ai_provider;
pub mod provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

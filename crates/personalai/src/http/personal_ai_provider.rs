//! Hosted Personal.AI API HTTP provider implementation
//!
//! This provider handles requests to the hosted Personal.AI API endpoints
//! with API key authentication.

use super::{HttpProvider, Method, RequestBuilder, provider::serialize_body};
use crate::error::Result;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::{sync::Arc, time::Duration};
use url::Url;

/// HTTP provider for the hosted Personal.AI API.
///
/// This provider implements the [`HttpProvider`] trait for the Personal.AI
/// API, handling API key authentication via the `x-api-key` header and JSON
/// request bodies. Every call is a single HTTP attempt; there is no retry or
/// backoff layer.
///
/// # Example
///
/// ```rust,no_run
/// use personalai::http::PersonalAiHttpProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(PersonalAiHttpProvider::builder()
///     .api_key("your-api-key")
///     .build()
///     .unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PersonalAiHttpProvider {
    pub(crate) inner: Arc<ProviderInner>,
}

#[derive(Debug)]
pub(crate) struct ProviderInner {
    /// HTTP client for making requests
    pub(crate) http_client: reqwest::Client,
    /// Base URL for the API
    pub(crate) base_url: Url,
    /// API key for authentication (x-api-key header)
    pub(crate) api_key: SecretString,
    /// Request timeout; `None` leaves the transport default in place
    pub(crate) timeout: Option<Duration>,
    /// Custom headers to include with every request
    pub(crate) default_headers: http::HeaderMap,
}

impl PersonalAiHttpProvider {
    /// Create a new builder for configuring the provider.
    pub fn builder() -> PersonalAiHttpProviderBuilder {
        PersonalAiHttpProviderBuilder::default()
    }

    /// Create a request builder with provider configuration.
    fn build_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                crate::error::Error::InvalidUrl(format!(
                    "Failed to construct URL from path '{}': {}",
                    path, e
                ))
            })?;

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .header("content-type", "application/json")
            .header("x-api-key", self.inner.api_key.expose_secret());

        if let Some(timeout) = self.inner.timeout {
            builder = builder.timeout(timeout);
        }

        // Add custom default headers
        for (key, value) in &self.inner.default_headers {
            if let Ok(value_str) = value.to_str() {
                builder = builder.header(key.as_str(), value_str);
            }
        }

        Ok(builder)
    }
}

#[async_trait]
impl HttpProvider for PersonalAiHttpProvider {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<super::Response> {
        let mut builder = self.build_request(method, path)?;

        if let Some(body) = body {
            let body_bytes = serialize_body(body)?;
            builder = builder.body(body_bytes);
        }

        builder.send().await
    }

    fn provider_name(&self) -> &'static str {
        "personal-ai"
    }

    fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Builder for creating a `PersonalAiHttpProvider` with custom configuration.
///
/// # Example
///
/// ```rust,no_run
/// use personalai::http::PersonalAiHttpProvider;
///
/// let provider = PersonalAiHttpProvider::builder()
///     .api_key("your-api-key")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct PersonalAiHttpProviderBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    default_headers: http::HeaderMap,
}

impl PersonalAiHttpProviderBuilder {
    /// Set the API key for authentication.
    ///
    /// This will be sent in the `x-api-key` header with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://api.personal.ai/v1/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// When unset, the transport default applies (no elapsed-time limit).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str.parse::<http::HeaderName>().map_err(|e| {
            crate::error::Error::HttpClient(format!("Invalid header name '{}': {}", key_str, e))
        })?;
        let value = value_str.parse::<http::HeaderValue>().map_err(|e| {
            crate::error::Error::HttpClient(format!("Invalid header value '{}': {}", value_str, e))
        })?;

        self.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the provider with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is provided, or it is empty
    /// - The base URL is invalid
    /// - HTTP client creation fails
    pub fn build(mut self) -> Result<PersonalAiHttpProvider> {
        if self.api_key.is_none() {
            #[cfg(feature = "env")]
            {
                dotenvy::dotenv().ok();
                self.api_key = std::env::var("PERSONAL_AI_API_KEY")
                    .ok()
                    .map(|s| SecretString::new(s.into_boxed_str()));
            }
        }

        let Some(api_key) = self.api_key else {
            return Err(crate::error::Error::Authentication(
                "No API key provided. Set PERSONAL_AI_API_KEY environment variable or provide one explicitly.".to_string(),
            ));
        };

        if api_key.expose_secret().is_empty() {
            return Err(crate::error::Error::Authentication(
                "API key must not be empty".to_string(),
            ));
        }

        let mut client_builder =
            reqwest::Client::builder().user_agent(format!("personalai-rust/{}", crate::VERSION));
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let http_client = client_builder
            .build()
            .map_err(|e| crate::error::Error::HttpClient(e.to_string()))?;

        let base_url_string = self
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(crate::error::Error::InvalidUrl(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let mut base_url: Url = base_url_string
            .parse()
            .map_err(|e| crate::error::Error::InvalidUrl(format!("{}", e)))?;

        // Validate URL scheme
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(crate::error::Error::InvalidUrl(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )));
            }
        }

        // Url::join treats the last path segment as a file unless the base
        // ends with '/', which would drop the "/v1" segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = Arc::new(ProviderInner {
            http_client,
            base_url,
            api_key,
            timeout: self.timeout,
            default_headers: self.default_headers,
        });

        Ok(PersonalAiHttpProvider { inner })
    }
}

//! Main client implementation for the Personal.AI API

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use std::sync::OnceLock;

use crate::{
    config::ClientConfig,
    error::Result,
    http::{HttpProvider, Method, PersonalAiHttpProvider, Response},
    resources::{ApiKeys, Memories, Messages, Uploads},
};

/// Main client for interacting with the Personal.AI API.
///
/// This client provides access to all Personal.AI API endpoints and handles
/// authentication and transport configuration.
///
/// # Example
///
/// ```rust,no_run
/// use personalai::Client;
///
/// let client = Client::new("your-api-key");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// HTTP provider for making requests (handles auth, URL construction)
    provider: Arc<dyn HttpProvider>,

    // Lazy-initialized resources
    memories: OnceLock<Memories>,
    messages: OnceLock<Messages>,
    uploads: OnceLock<Uploads>,
    api_keys: OnceLock<ApiKeys>,
}

impl Client {
    /// Create a new client with an API key.
    ///
    /// The API key can also be loaded from the `PERSONAL_AI_API_KEY`
    /// environment variable if the `env` feature is enabled.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the
    /// default configuration. For fallible construction with explicit error
    /// handling, use [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use personalai::Client;
    ///
    /// let client = Client::new("your-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("Failed to build client with provided API key")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the base URL is invalid, or
    /// HTTP client configuration fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use personalai::Client;
    ///
    /// let client = Client::try_new("your-api-key").expect("Failed to create client");
    /// ```
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> PersonalAiClientBuilder {
        PersonalAiClientBuilder::default()
    }

    /// Create a client with a custom HTTP provider.
    ///
    /// This is the seam for injecting an alternative transport, e.g. an
    /// instrumented or recording provider in tests.
    pub fn from_provider(provider: Arc<dyn HttpProvider>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                provider,
                memories: OnceLock::new(),
                messages: OnceLock::new(),
                uploads: OnceLock::new(),
                api_keys: OnceLock::new(),
            }),
        }
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut provider_builder = PersonalAiHttpProvider::builder();

        if let Some(api_key) = config.api_key {
            provider_builder = provider_builder.api_key(api_key.expose_secret());
        }
        if let Some(base_url) = config.base_url {
            provider_builder = provider_builder.base_url(base_url);
        }
        if let Some(timeout) = config.timeout {
            provider_builder = provider_builder.timeout(timeout);
        }

        // Add custom headers
        for (key, value) in &config.default_headers {
            if let Ok(value_str) = value.to_str() {
                provider_builder = provider_builder.header(key.as_str(), value_str)?;
            }
        }

        let provider = Arc::new(provider_builder.build()?);

        Ok(Self::from_provider(provider))
    }

    /// Access the Memories API endpoint.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use personalai::{Client, CreateMemoryRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("api-key");
    /// let request = CreateMemoryRequest::builder()
    ///     .text("My first memory with Personal.AI!")
    ///     .source_name("Notes")
    ///     .build()?;
    /// let response = client.memories().create(request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn memories(&self) -> &Memories {
        self.inner
            .memories
            .get_or_init(|| Memories::new(self.clone()))
    }

    /// Access the Messages API endpoint.
    pub fn messages(&self) -> &Messages {
        self.inner
            .messages
            .get_or_init(|| Messages::new(self.clone()))
    }

    /// Access the Uploads API endpoint.
    pub fn uploads(&self) -> &Uploads {
        self.inner.uploads.get_or_init(|| Uploads::new(self.clone()))
    }

    /// Access the API key endpoint.
    pub fn api_keys(&self) -> &ApiKeys {
        self.inner
            .api_keys
            .get_or_init(|| ApiKeys::new(self.clone()))
    }

    /// Issue a POST request with a JSON body to an endpoint path.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: serde::Serialize + Send + Sync,
    {
        self.inner
            .provider
            .request(
                Method::POST,
                path,
                Some(body as &(dyn erased_serde::Serialize + Send + Sync)),
            )
            .await
    }

    /// Issue a GET request with no body to an endpoint path.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        self.inner.provider.request(Method::GET, path, None).await
    }

    /// Get the base URL for the API
    pub(crate) fn base_url(&self) -> &str {
        self.inner.provider.base_url()
    }

    /// Get API key for special cases that need direct access
    ///
    /// This is only available when using PersonalAiHttpProvider. For other
    /// providers, this will return an empty string.
    pub(crate) fn api_key(&self) -> String {
        self.inner
            .provider
            .as_any()
            .downcast_ref::<PersonalAiHttpProvider>()
            .map(|p| p.inner.api_key.expose_secret().to_string())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Client {
    /// Debug output never contains the full API key; only the first and
    /// last five characters are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("provider", &self.inner.provider.provider_name())
            .field("base_url", &self.base_url())
            .field("api_key", &mask_api_key(&self.api_key()))
            .finish()
    }
}

/// Mask an API key for display, keeping the first and last five characters.
///
/// Keys shorter than ten characters are fully redacted; first-five plus
/// last-five would reconstruct them.
pub(crate) fn mask_api_key(key: &str) -> String {
    let len = key.chars().count();
    if len < 10 {
        return "*****".to_string();
    }
    let head: String = key.chars().take(5).collect();
    let tail: String = key.chars().skip(len - 5).collect();
    format!("{head}...{tail}")
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct PersonalAiClientBuilder {
    config: ClientConfig,
}

impl PersonalAiClientBuilder {
    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// When unset, the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::error::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::error::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .api_key("test-key")
            .base_url("https://example.com/v1")
            .timeout(Duration::from_secs(30))
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new() {
        let client = Client::new("test-key");
        // Should not panic
        let _ = client.memories();
        let _ = client.messages();
        let _ = client.uploads();
        let _ = client.api_keys();
    }

    #[test]
    fn test_client_rejects_empty_key() {
        let result = Client::try_new("");
        assert!(result.is_err());
    }

    #[test]
    fn test_resource_lazy_initialization() {
        let client = Client::new("test-key");

        // Resources are initialized once via OnceLock
        let memories1 = client.memories();
        let memories2 = client.memories();
        assert!(
            std::ptr::eq(memories1, memories2),
            "Multiple calls should return same Memories instance"
        );

        let api_keys1 = client.api_keys();
        let api_keys2 = client.api_keys();
        assert!(
            std::ptr::eq(api_keys1, api_keys2),
            "Multiple calls should return same ApiKeys instance"
        );
    }

    #[test]
    fn test_client_clone_shares_arc() {
        let client1 = Client::new("test-key");
        let client2 = client1.clone();

        assert_eq!(client1.base_url(), client2.base_url());
        assert_eq!(client1.api_key(), client2.api_key());
    }

    #[test]
    fn test_debug_masks_api_key() {
        let client = Client::new("abcde12345");
        let debug = format!("{:?}", client);

        assert!(debug.contains("abcde...12345"));
        assert!(!debug.contains("abcde12345"));
    }

    #[test]
    fn test_debug_redacts_short_key() {
        let client = Client::new("short");
        let debug = format!("{:?}", client);

        assert!(!debug.contains("short"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abcde12345"), "abcde...12345");
        assert_eq!(
            mask_api_key("0123456789abcdef0123456789abcdef"),
            "01234...bcdef"
        );
        assert_eq!(mask_api_key("tiny"), "*****");
        assert_eq!(mask_api_key(""), "*****");
    }
}

//! Configuration for the Personal.AI client

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the Personal.AI client.
///
/// This struct holds the transport and authentication options for creating a
/// client. Everything here is fixed once the client is built.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API key for authentication
    pub api_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored. This will look for:
    /// - `PERSONAL_AI_API_KEY` for authentication
    /// - `PERSONAL_AI_BASE_URL` for the API base URL
    /// - `PERSONAL_AI_TIMEOUT` for request timeout (in seconds)
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("PERSONAL_AI_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("PERSONAL_AI_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("PERSONAL_AI_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Some(Duration::from_secs(timeout_secs));
        }

        Ok(config)
    }
}

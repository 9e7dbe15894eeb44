//! API key endpoint

use super::Resource;
use crate::{client::Client, error::Result};
use serde_json::Value;
use tracing::{debug, info, warn};

/// API key resource.
#[derive(Clone)]
pub struct ApiKeys {
    client: Client,
}

impl ApiKeys {
    /// Create a new ApiKeys resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Validate the configured API key.
    ///
    /// Returns the API's JSON description of the key's validity, or `None`
    /// if the API answered with an error status (the failure is logged).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use personalai::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(validity) = client.api_keys().validate().await? {
    ///     println!("{validity}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn validate(&self) -> Result<Option<Value>> {
        debug!("Validating API key");
        let start = std::time::Instant::now();

        let result = self.client.get("api-key/validate").await?.into_api_result();

        let elapsed = start.elapsed();
        match &result {
            Ok(Some(_)) => {
                info!(elapsed_ms = elapsed.as_millis() as u64, "API key checked");
            }
            Ok(None) => {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "API key validation rejected"
                );
            }
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "API key validation failed");
            }
        }

        result
    }
}

impl Resource for ApiKeys {
    fn client(&self) -> &Client {
        &self.client
    }
}

//! Uploads API endpoint

use super::Resource;
use crate::{client::Client, error::Result, types::UploadRequest};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Uploads API resource.
///
/// Uploads URIs for the remote service to ingest.
#[derive(Clone)]
pub struct Uploads {
    client: Client,
}

impl Uploads {
    /// Create a new Uploads resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a URI.
    ///
    /// The URI is not validated locally. Returns the API's JSON response
    /// verbatim, or `None` if the API answered with an error status (the
    /// failure is logged).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use personalai::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let response = client.uploads().create("https://example.com/a").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, request: impl Into<UploadRequest>) -> Result<Option<Value>> {
        let request = request.into();
        debug!(url = %request.url, "Uploading URI");
        let start = std::time::Instant::now();

        let result = self
            .client
            .post("upload", &request)
            .await?
            .into_api_result();

        let elapsed = start.elapsed();
        match &result {
            Ok(Some(_)) => {
                info!(elapsed_ms = elapsed.as_millis() as u64, "URI uploaded");
            }
            Ok(None) => {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Upload rejected by API"
                );
            }
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "Upload failed");
            }
        }

        result
    }
}

impl Resource for Uploads {
    fn client(&self) -> &Client {
        &self.client
    }
}

//! Messages API endpoint

use super::Resource;
use crate::{client::Client, error::Result, types::MessageRequest};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Messages API resource.
///
/// Sends natural-language queries to your AI and returns its generated
/// response.
#[derive(Clone)]
pub struct Messages {
    client: Client,
}

impl Messages {
    /// Create a new Messages resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send a message to the AI and receive a response.
    ///
    /// Returns the API's JSON response verbatim, or `None` if the API
    /// answered with an error status (the failure is logged).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use personalai::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(response) = client.messages().create("what is k8s?").await? {
    ///     println!("{response}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, request: impl Into<MessageRequest>) -> Result<Option<Value>> {
        let request = request.into();
        debug!(text_len = request.text.len(), "Sending message to AI");
        let start = std::time::Instant::now();

        let result = self
            .client
            .post("message", &request)
            .await?
            .into_api_result();

        let elapsed = start.elapsed();
        match &result {
            Ok(Some(_)) => {
                info!(elapsed_ms = elapsed.as_millis() as u64, "AI responded");
            }
            Ok(None) => {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Message rejected by API"
                );
            }
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "Message failed");
            }
        }

        result
    }
}

impl Resource for Messages {
    fn client(&self) -> &Client {
        &self.client
    }
}

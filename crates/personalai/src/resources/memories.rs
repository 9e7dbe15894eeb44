//! Memories API endpoint

use super::Resource;
use crate::{client::Client, error::Result, types::CreateMemoryRequest};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Memories API resource.
///
/// Creates memories in your Personal.AI knowledge stack.
#[derive(Clone)]
pub struct Memories {
    client: Client,
}

impl Memories {
    /// Create a new Memories resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a memory.
    ///
    /// Returns the API's JSON response verbatim, or `None` if the API
    /// answered with an error status (the failure is logged).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use personalai::{Client, CreateMemoryRequest};
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = CreateMemoryRequest::builder()
    ///     .text("My first memory with Personal.AI!")
    ///     .source_name("Notes")
    ///     .build()?;
    ///
    /// if let Some(response) = client.memories().create(request).await? {
    ///     println!("{response}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, request), fields(source_name = %request.source_name))]
    pub async fn create(&self, request: CreateMemoryRequest) -> Result<Option<Value>> {
        if let Err(e) = crate::validation::validate_memory_request(&request) {
            warn!("Request validation failed: {}", e);
            return Err(e);
        }

        debug!("Creating memory");
        let start = std::time::Instant::now();

        let result = self
            .client
            .post("memory", &request)
            .await?
            .into_api_result();

        let elapsed = start.elapsed();
        match &result {
            Ok(Some(_)) => {
                info!(elapsed_ms = elapsed.as_millis() as u64, "Memory created");
            }
            Ok(None) => {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Memory creation rejected by API"
                );
            }
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis() as u64, error = %e, "Memory creation failed");
            }
        }

        result
    }
}

impl Resource for Memories {
    fn client(&self) -> &Client {
        &self.client
    }
}

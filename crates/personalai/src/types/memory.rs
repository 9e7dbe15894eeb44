//! Memory-related types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Request parameters for creating a memory.
///
/// `text` and `source_name` are required; the remaining fields are sent only
/// when set.
///
/// # Example
///
/// ```rust
/// use personalai::CreateMemoryRequest;
///
/// let request = CreateMemoryRequest::builder()
///     .text("My first memory with Personal.AI!")
///     .source_name("Notes")
///     .device_name("Apple Watch")
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "PascalCase")]
pub struct CreateMemoryRequest {
    /// Plain text memory to upload to your stack
    pub text: String,

    /// The source or application of the memory, to help you recall where it
    /// is from (e.g. "Notes" or "My Thoughts")
    pub source_name: String,

    /// Time (including timezone) of the memory, passed through as-is
    /// (e.g. "Wed, 28 Jul 2021 13:30:00 PDT")
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub created_time: Option<String>,

    /// The device the memory was captured or uploaded from
    /// (e.g. "Apple Watch")
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub device_name: Option<String>,

    /// Formatted text stored as-is; may contain markup
    /// (e.g. `<p>My first memory with Personal.AI!</p>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub raw_feed: Option<String>,
}

impl CreateMemoryRequest {
    /// Create a builder for constructing a CreateMemoryRequest.
    pub fn builder() -> CreateMemoryRequestBuilder {
        CreateMemoryRequestBuilder::default()
    }

    /// Create a request with only the required fields.
    pub fn new(text: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_name: source_name.into(),
            created_time: None,
            device_name: None,
            raw_feed: None,
        }
    }
}

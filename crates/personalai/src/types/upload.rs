//! Upload-related types

use serde::{Deserialize, Serialize};

/// Request parameters for uploading a URI.
///
/// The URI is passed through without local validation; the API decides
/// whether it can be fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    /// The URI to upload
    #[serde(rename = "Url")]
    pub url: String,
}

impl UploadRequest {
    /// Create an upload request from a URI.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl From<&str> for UploadRequest {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for UploadRequest {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

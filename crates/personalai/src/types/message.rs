//! Message-related types

use serde::{Deserialize, Serialize};

/// Request parameters for sending a message to the AI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Message to send to your AI for a response (e.g. "what is k8s?")
    #[serde(rename = "Text")]
    pub text: String,
}

impl MessageRequest {
    /// Create a message request from query text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for MessageRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MessageRequest {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

//! # Personal.AI SDK
//!
//! Rust SDK for the Personal.AI memory and message API supporting:
//! - Memory ingestion into your personal knowledge stack
//! - Natural-language messages to your AI with generated responses
//! - URI uploads
//! - API key validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use personalai::{Client, CreateMemoryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key");
//!
//!     let request = CreateMemoryRequest::builder()
//!         .text("My first memory with Personal.AI!")
//!         .source_name("Notes")
//!         .build()?;
//!
//!     if let Some(response) = client.memories().create(request).await? {
//!         println!("{response}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! HTTP status failures (4xx/5xx) are reported through [`tracing`] and
//! surfaced as `Ok(None)`: the API declined the call, and there is no
//! result. Transport faults (connection refused, DNS, timeout) and
//! undecodable success bodies propagate as [`Error`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;
pub mod validation;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use personalai::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, JsonValue, Result,
        types::{CreateMemoryRequest, MessageRequest, UploadRequest},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.personal.ai/v1/";

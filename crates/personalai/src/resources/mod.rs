//! API resource endpoints
//!
//! This module contains the implementation of all API endpoints, organized
//! by resource type. Every operation is a single HTTP round trip returning
//! the remote JSON verbatim, or `None` when the API answered with an error
//! status.

pub mod api_keys;
pub mod memories;
pub mod messages;
pub mod uploads;

pub use api_keys::ApiKeys;
pub use memories::Memories;
pub use messages::Messages;
pub use uploads::Uploads;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

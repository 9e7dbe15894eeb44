//! Request payload types
//!
//! These types serialize to the PascalCase field names the Personal.AI wire
//! protocol expects. Optional fields use `Option` with
//! `skip_serializing_if`, so a field is present on the wire exactly when the
//! caller supplied it: a supplied empty string is still present, and an
//! unset option is absent rather than `null`.

pub mod memory;
pub mod message;
pub mod upload;

pub use memory::{CreateMemoryRequest, CreateMemoryRequestBuilder};
pub use message::MessageRequest;
pub use upload::UploadRequest;

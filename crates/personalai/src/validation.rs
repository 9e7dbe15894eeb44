//! Request validation for the Personal.AI SDK
//!
//! Validation happens before a request leaves the process, so a caller gets
//! a clear error instead of a rejected HTTP call.
//!
//! # Examples
//!
//! ```rust
//! use personalai::CreateMemoryRequest;
//! use personalai::validation::validate_memory_request;
//!
//! let request = CreateMemoryRequest::new("My first memory", "Notes");
//! validate_memory_request(&request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Error, Result};
use crate::types::CreateMemoryRequest;

/// Validate a CreateMemoryRequest before sending to the API.
///
/// `text` and `source_name` must be non-empty. Optional fields are passed
/// through untouched: `created_time` in particular is not parsed, and a
/// supplied empty string in an optional field is allowed.
///
/// # Errors
///
/// Returns `Error::InvalidRequest` with a descriptive message for any
/// validation failure.
pub fn validate_memory_request(request: &CreateMemoryRequest) -> Result<()> {
    if request.text.is_empty() {
        return Err(Error::InvalidRequest(
            "memory text must not be empty".to_string(),
        ));
    }

    if request.source_name.is_empty() {
        return Err(Error::InvalidRequest(
            "memory source name must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = CreateMemoryRequest::new("My first memory", "Notes");
        assert!(validate_memory_request(&request).is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let request = CreateMemoryRequest::new("", "Notes");
        assert!(matches!(
            validate_memory_request(&request),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_empty_source_name_rejected() {
        let request = CreateMemoryRequest::new("My first memory", "");
        assert!(matches!(
            validate_memory_request(&request),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_empty_optional_fields_allowed() {
        let request = CreateMemoryRequest::builder()
            .text("My first memory")
            .source_name("Notes")
            .device_name("")
            .raw_feed("")
            .build()
            .unwrap();

        assert!(validate_memory_request(&request).is_ok());
    }
}

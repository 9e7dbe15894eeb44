//! Common test utilities and helpers

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "pai-test-key-01234567890123456789012345678901234567890123456789".to_string()
}

//! Example demonstrating memory creation with the Personal.AI SDK
//!
//! # Prerequisites
//!
//! Set your API key:
//! ```bash
//! export PERSONAL_AI_API_KEY=your-api-key
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --example create_memory
//! ```

use personalai::{Client, CreateMemoryRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a client; the API key is read from PERSONAL_AI_API_KEY
    let client = Client::builder().build()?;

    let request = CreateMemoryRequest::builder()
        .text("My first memory with Personal.AI!")
        .source_name("Notes")
        .device_name("Rust SDK example")
        .build()?;

    match client.memories().create(request).await? {
        Some(response) => println!("Memory created: {response}"),
        None => println!("The API declined the memory"),
    }

    Ok(())
}

//! Example checking whether an API key is valid
//!
//! # Usage
//!
//! ```bash
//! PERSONAL_AI_API_KEY=your-api-key cargo run --example validate_key
//! ```

use personalai::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::builder().build()?;

    // The client's Debug output masks the key
    println!("Using {client:?}");

    match client.api_keys().validate().await? {
        Some(validity) => println!("Key validity: {validity}"),
        None => println!("The API rejected the key"),
    }

    Ok(())
}

//! Example demonstrating a message round trip with the Personal.AI SDK
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
//! cargo run --example ai_message
//! ```

use personalai::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(&std::env::var("PERSONAL_AI_API_KEY")?);

    match client.messages().create("what is k8s?").await? {
        Some(response) => println!("{response}"),
        None => println!("The API declined the message"),
    }

    Ok(())
}

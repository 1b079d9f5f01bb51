//! Send one completion through OpenAiBrain.
//!
//! Run with: cargo run -p openai-brain --example test_completion -- "Your message here"
//!
//! Requires OPENAI_API_KEY (a .env file is read if present).

use std::env;

use openai_brain::{Brain, CompletionRequest, OpenAiBrain};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let message_text = if args.is_empty() {
        "Hello! Please respond with a short greeting.".to_string()
    } else {
        args.join(" ")
    };

    let brain = OpenAiBrain::from_env()?;
    println!("Model: {}", brain.config().model);

    let request = CompletionRequest::new()
        .system("You are a concise assistant.")
        .user(message_text)
        .temperature(0.7)
        .max_tokens(200);

    let completion = brain.complete(request).await?;
    println!("{}", completion.content_text().unwrap_or("(no content)"));
    Ok(())
}

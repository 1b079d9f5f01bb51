//! Run one message through the full pipeline against the seed catalog.
//!
//! Run with: cargo run -p orchestrator --example chat_once -- "IVF in Dubai under $5000"
//!
//! Configuration via .env file or environment variables:
//!   OPENAI_API_KEY     - API key (required)
//!   OPENAI_MODEL       - Default model for every stage
//!   CATALOG_PATH       - Catalog JSON to use instead of the seed
//!   RUST_LOG           - Log filter (default: info)

use std::env;

use catalog::CatalogProvider;
use orchestrator::{ChatRequest, Locale, Orchestrator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let message = if args.is_empty() {
        "I'm nervous about getting dental implants in Istanbul, my budget is $2000".to_string()
    } else {
        args.join(" ")
    };
    let locale = match env::var("CHAT_LOCALE").as_deref() {
        Ok("uae") => Locale::Uae,
        _ => Locale::En,
    };

    let orchestrator = Orchestrator::from_env(CatalogProvider::from_env()?)?;
    let response = orchestrator
        .process(ChatRequest::new(message).locale(locale))
        .await?;

    println!("{}\n", response.message);
    println!("{}", serde_json::to_string_pretty(&response.cards)?);
    Ok(())
}

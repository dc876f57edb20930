//! Load a text document into the CharFreq document store.
//!
//! One-shot companion to the server: reads a local file and stores it
//! under the content key the server fetches from.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use redis::AsyncCommands;
use tracing::info;

/// charfreq-seed — store a text file in the document store.
#[derive(Parser, Debug)]
#[command(name = "charfreq-seed", version, about)]
struct SeedArgs {
    /// Text file to store.
    file: PathBuf,

    /// Document store URL.
    #[arg(long, env = "CHARFREQ_REDIS_URL")]
    redis_url: String,

    /// Key to store the document under.
    #[arg(long, default_value = "wap.txt", env = "CHARFREQ_CONTENT_KEY")]
    content_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = SeedArgs::parse();

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let client = redis::Client::open(args.redis_url.as_str())
        .context("invalid document store URL")?;
    let mut conn = client
        .get_connection_manager()
        .await
        .context("failed to connect to document store")?;

    let chars = content.chars().count();
    let _: () = conn
        .set(&args.content_key, &content)
        .await
        .context("failed to store document")?;

    info!(key = %args.content_key, chars, "document stored");
    Ok(())
}

//! Server configuration from CLI flags and environment.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// CharFreq — character-frequency tutorial server.
#[derive(Parser, Debug, Clone)]
#[command(name = "charfreq-server", version, about)]
pub struct Config {
    /// Port to listen on.
    #[arg(short, long, default_value = "3000", env = "CHARFREQ_PORT")]
    pub port: u16,

    /// Bundled text file served when no document store is configured, and
    /// always used by the server-side processing endpoint.
    #[arg(
        long,
        default_value = "assets/hello.txt",
        env = "CHARFREQ_CONTENT_FILE"
    )]
    pub content_file: PathBuf,

    /// Document store URL (e.g. redis://localhost:6379). When set, the
    /// content endpoint reads from the store instead of the bundled file.
    #[arg(long, env = "CHARFREQ_REDIS_URL")]
    pub redis_url: Option<String>,

    /// Name of a secret under /run/secrets holding the document store URL.
    /// Takes precedence over --redis-url, so credentials never appear in
    /// process arguments or source.
    #[arg(long, env = "CHARFREQ_REDIS_URL_SECRET")]
    pub redis_url_secret: Option<String>,

    /// Key of the stored document to serve.
    #[arg(long, default_value = "wap.txt", env = "CHARFREQ_CONTENT_KEY")]
    pub content_key: String,
}

impl Config {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the document store URL, preferring the secret file.
    pub fn store_url(&self) -> anyhow::Result<Option<String>> {
        if let Some(name) = &self.redis_url_secret {
            let url = read_secret(name)
                .with_context(|| format!("failed to read secret {name}"))?;
            return Ok(Some(url));
        }
        Ok(self.redis_url.clone())
    }
}

fn read_secret(name: &str) -> std::io::Result<String> {
    let path = format!("/run/secrets/{name}");
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

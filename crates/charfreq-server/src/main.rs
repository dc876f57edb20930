//! CharFreq — character-frequency tutorial server.

use anyhow::Result;
use charfreq_server::{config::Config, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();
    start_server(config).await
}

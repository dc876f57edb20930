//! Shared server state.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::content::ContentSource;

pub struct AppState {
    pub config: Config,
    pub source: ContentSource,
}

impl AppState {
    /// Build state from configuration, connecting to the document store
    /// when one is configured.
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let source = match config.store_url()? {
            Some(url) => {
                info!(key = %config.content_key, "using document store");
                ContentSource::redis(&url, config.content_key.clone()).await?
            }
            None => {
                info!(path = %config.content_file.display(), "serving bundled content file");
                ContentSource::file(config.content_file.clone())
            }
        };

        Ok(Arc::new(Self { config, source }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file_config(path: PathBuf) -> Config {
        Config {
            port: 0,
            content_file: path,
            redis_url: None,
            redis_url_secret: None,
            content_key: "wap.txt".to_string(),
        }
    }

    #[tokio::test]
    async fn defaults_to_file_source() {
        let state = AppState::new(file_config(PathBuf::from("assets/hello.txt")))
            .await
            .unwrap();
        assert!(matches!(state.source, ContentSource::File { .. }));
    }
}

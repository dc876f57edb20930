//! Content retrieval: the stored document or a bundled file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client,
};
use tracing::debug;

/// Error type for content retrieval.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The stored document or bundled file does not exist.
    #[error("document not found")]
    NotFound,

    /// The backing store failed.
    #[error("content retrieval failed: {0}")]
    Backend(String),
}

/// Where the tutorial's sample text comes from.
///
/// Either the externally-owned document store or a bundled file, selected
/// by deployment configuration. Delivery is all-or-nothing: one `String`
/// or an error, no streaming.
#[derive(Clone)]
pub enum ContentSource {
    /// A text file shipped with the server.
    File { path: PathBuf },
    /// A document in the store, fetched by key.
    Redis { conn: ConnectionManager, key: String },
}

impl ContentSource {
    /// Source backed by a bundled file.
    #[must_use]
    pub fn file(path: PathBuf) -> Self {
        Self::File { path }
    }

    /// Source backed by the document store at `url`.
    pub async fn redis(url: &str, key: String) -> Result<Self, ContentError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(500));

        let client = Client::open(url).map_err(|e| ContentError::Backend(e.to_string()))?;
        let conn = client
            .get_connection_manager_with_config(config)
            .await
            .map_err(|e| ContentError::Backend(e.to_string()))?;

        Ok(Self::Redis { conn, key })
    }

    /// Fetch the full text.
    pub async fn fetch(&self) -> Result<String, ContentError> {
        match self {
            Self::File { path } => read_bundled(path).await,
            Self::Redis { conn, key } => {
                let mut conn = conn.clone();
                let value: Option<String> = conn
                    .get(key)
                    .await
                    .map_err(|e| ContentError::Backend(e.to_string()))?;
                match value {
                    Some(content) => {
                        debug!(key = %key, chars = content.chars().count(), "document fetched");
                        Ok(content)
                    }
                    None => Err(ContentError::NotFound),
                }
            }
        }
    }
}

/// Read a bundled text file, mapping a missing file to `NotFound`.
pub async fn read_bundled(path: &Path) -> Result<String, ContentError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ContentError::NotFound),
        Err(e) => Err(ContentError::Backend(e.to_string())),
    }
}

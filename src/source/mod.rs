//! Document loading
//!
//! Resolves the configured [`DocumentSource`] into raw HTML bytes. Parsing
//! happens afterwards, outside any async context.

pub mod fetch;

pub use fetch::{FetchOptions, fetch_document};

use std::path::Path;
use tracing::info;

use crate::config::{DocumentSource, ScrapeConfig};
use crate::error::{ScrapeError, ScrapeResult};

/// Read an HTML document from the local filesystem.
///
/// # Errors
///
/// Returns [`ScrapeError::Io`] when the file cannot be read.
pub async fn read_document(path: &Path) -> ScrapeResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the raw bytes of the configured document.
///
/// # Errors
///
/// Propagates fetch and read failures; nothing is retried.
pub async fn load_document(config: &ScrapeConfig) -> ScrapeResult<Vec<u8>> {
    match config.source() {
        DocumentSource::Url(url) => {
            info!(%url, "Fetching document");
            let options = FetchOptions {
                timeout: config.timeout(),
                max_bytes: config.max_document_bytes(),
            };
            fetch_document(url, &options).await
        }
        DocumentSource::File(path) => {
            info!(path = %path.display(), "Reading document");
            read_document(path).await
        }
    }
}

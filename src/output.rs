//! Output writing
//!
//! The JSON goes to stdout (newline terminated) or to the configured file.

use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{ScrapeError, ScrapeResult};

/// Write the serialized tables to `output`, or to stdout when `None`.
///
/// # Errors
///
/// Returns [`ScrapeError::Output`] when the destination cannot be written.
pub async fn write_output(json: &str, output: Option<&Path>) -> ScrapeResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(ScrapeError::Output)?;
            }
            tokio::fs::write(path, json)
                .await
                .map_err(ScrapeError::Output)?;
            info!(path = %path.display(), bytes = json.len(), "Wrote tables");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(json.as_bytes())
                .await
                .map_err(ScrapeError::Output)?;
            stdout.write_all(b"\n").await.map_err(ScrapeError::Output)?;
            stdout.flush().await.map_err(ScrapeError::Output)?;
        }
    }

    Ok(())
}

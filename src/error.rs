//! Error types for table scraping
//!
//! Every failure here is terminal for the current run. Structural oddities in
//! the document itself (missing `thead`, malformed `rowspan`) are never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scrape operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Error types for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Rendering mode is neither `text` nor `xml`
    #[error("Invalid mode '{0}': expected 'text' or 'xml'")]
    InvalidMode(String),

    /// Neither a URL nor a file was configured
    #[error("No document source configured: set a url or a file")]
    MissingSource,

    /// Configured URL cannot be parsed
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Config file exists but its content is malformed
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// HTTP request could not be completed
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body is larger than the configured cap
    #[error("Document from {url} exceeds size limit of {limit} bytes")]
    TooLarge { url: String, limit: usize },

    /// Local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTML parser failed on the input stream
    #[error("Failed to parse HTML document: {0}")]
    Parse(#[source] std::io::Error),

    /// Table records could not be encoded as JSON
    #[error("Failed to serialize tables: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output could not be written
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl ScrapeError {
    /// Check if the error comes from configuration resolution rather than
    /// from loading or processing the document
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidMode(_)
                | ScrapeError::MissingSource
                | ScrapeError::InvalidUrl { .. }
                | ScrapeError::ConfigParse { .. }
        )
    }
}

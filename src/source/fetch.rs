//! HTTP document download
//!
//! Streams the response body with a size cap, checked against
//! `Content-Length` up front and again per chunk for servers that omit or
//! misreport it.

use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};
use crate::utils::{BROWSER_USER_AGENT, DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_TIMEOUT_SECS, HTML_ACCEPT};

/// Timeout and size limits for one document request
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Maximum body size in bytes
    pub max_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// Download the document at `url` and return the raw body bytes.
///
/// # Errors
///
/// Fails on transport errors, non-success status codes and bodies larger
/// than `options.max_bytes`.
pub async fn fetch_document(url: &str, options: &FetchOptions) -> ScrapeResult<Vec<u8>> {
    let fetch_error = |source: reqwest::Error| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = Client::builder().build().map_err(fetch_error)?;
    let response = client
        .get(url)
        .timeout(options.timeout)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, HTML_ACCEPT)
        .send()
        .await
        .map_err(fetch_error)?;

    // Check status
    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    // Enforce limit BEFORE downloading
    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > options.max_bytes as u64 {
        return Err(ScrapeError::TooLarge {
            url: url.to_string(),
            limit: options.max_bytes,
        });
    }

    let mut buffer = if expected_size > 0 {
        Vec::with_capacity(expected_size as usize)
    } else {
        Vec::new()
    };

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(fetch_error)?;
        if buffer.len() + chunk.len() > options.max_bytes {
            return Err(ScrapeError::TooLarge {
                url: url.to_string(),
                limit: options.max_bytes,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    debug!(%url, bytes = buffer.len(), "Downloaded document");
    Ok(buffer)
}

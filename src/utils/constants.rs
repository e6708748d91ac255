//! Shared configuration constants for tablescrape
//!
//! Default values used by the config builder and the document loader.

/// Default HTTP request timeout: 30 seconds
///
/// Covers connect, redirects and body download for a single page.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default cap on a fetched document: 20 MiB
///
/// Checked against `Content-Length` before downloading and again while the
/// body streams in.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 20 * 1024 * 1024;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Browser user agent sent with document requests
///
/// Some sites serve stripped-down markup, or nothing, to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// `Accept` header for document requests
pub const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

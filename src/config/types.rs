//! Core configuration types for table scraping
//!
//! This module contains the resolved `ScrapeConfig` and the document source it
//! points at.

use serde::Serialize;
use std::path::PathBuf;

use crate::table::RenderMode;

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Fetched with an HTTP GET
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

/// Main configuration struct for a scrape run
///
/// Always built through [`ScrapeConfig::builder`], which guarantees a source
/// is present. Serializes to the shape printed by `--print`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeConfig {
    pub(crate) url: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) mode: RenderMode,
    /// Output file; stdout when unset
    pub(crate) output: Option<PathBuf>,
    pub(crate) print: bool,

    /// Timeout in seconds for the document request
    ///
    /// Default: 30 seconds
    pub(crate) timeout_secs: u64,

    /// Maximum accepted size of a fetched document in bytes
    ///
    /// Default: 20 MiB
    pub(crate) max_document_bytes: usize,

    /// Resolved from `url` and `file`; the URL wins when both are set
    #[serde(skip)]
    pub(crate) source: DocumentSource,
}

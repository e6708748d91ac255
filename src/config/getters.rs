//! Getter methods for `ScrapeConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{DocumentSource, ScrapeConfig};
use crate::table::RenderMode;

impl ScrapeConfig {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    #[must_use]
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    #[must_use]
    pub fn print(&self) -> bool {
        self.print
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn max_document_bytes(&self) -> usize {
        self.max_document_bytes
    }

    /// Pretty JSON rendering of the configuration, as shown by `--print`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

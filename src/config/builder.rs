//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! `build()` only exists once a document source (URL or file) has been set.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{DocumentSource, ScrapeConfig};
use crate::error::{ScrapeError, ScrapeResult};
use crate::table::RenderMode;
use crate::utils::{
    DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_TIMEOUT_SECS, is_valid_url, normalize_url,
};

// Type states for the builder
pub struct WithSource;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) url: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) mode: RenderMode,
    pub(crate) output: Option<PathBuf>,
    pub(crate) print: bool,
    pub(crate) timeout_secs: u64,
    pub(crate) max_document_bytes: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            mode: RenderMode::default(),
            output: None,
            print: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl<State> ScrapeConfigBuilder<State> {
    fn into_state<Next>(self) -> ScrapeConfigBuilder<Next> {
        ScrapeConfigBuilder {
            url: self.url,
            file: self.file,
            mode: self.mode,
            output: self.output,
            print: self.print,
            timeout_secs: self.timeout_secs,
            max_document_bytes: self.max_document_bytes,
            _phantom: PhantomData,
        }
    }

    /// Fetch the document from `url`. A missing scheme becomes `https://`.
    pub fn url(mut self, url: impl Into<String>) -> ScrapeConfigBuilder<WithSource> {
        self.url = Some(normalize_url(&url.into()));
        self.into_state()
    }

    /// Read the document from a local file. Ignored when a URL is also set.
    pub fn file(mut self, path: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithSource> {
        self.file = Some(path.into());
        self.into_state()
    }

    #[must_use]
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    #[must_use]
    pub fn print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_document_bytes(mut self, bytes: usize) -> Self {
        self.max_document_bytes = bytes;
        self
    }
}

impl ScrapeConfigBuilder<WithSource> {
    /// Validate and produce the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidUrl`] when the URL is not an http(s) URL
    /// with a host.
    pub fn build(self) -> ScrapeResult<ScrapeConfig> {
        let source = match (&self.url, &self.file) {
            (Some(url), _) => {
                if !is_valid_url(url) {
                    return Err(ScrapeError::InvalidUrl {
                        url: url.clone(),
                        message: "expected an http(s) URL with a host".to_string(),
                    });
                }
                DocumentSource::Url(url.clone())
            }
            (None, Some(file)) => DocumentSource::File(file.clone()),
            (None, None) => return Err(ScrapeError::MissingSource),
        };

        Ok(ScrapeConfig {
            url: self.url,
            file: self.file,
            mode: self.mode,
            output: self.output,
            print: self.print,
            timeout_secs: self.timeout_secs,
            max_document_bytes: self.max_document_bytes,
            source,
        })
    }
}

//! Config file loading
//!
//! A config file is optional. A file that cannot be read, or whose format
//! cannot be determined, only produces a warning and the run continues with
//! whatever the command line provides. A file that can be read but does not
//! parse is fatal.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::types::ScrapeConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::table::RenderMode;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Infer the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Raw, unvalidated settings as they appear in a config file.
///
/// Every field is optional so command-line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub mode: Option<String>,
    pub output: Option<PathBuf>,
    pub print: Option<bool>,
    pub timeout_secs: Option<u64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|p| !p.as_os_str().is_empty())
}

impl ConfigFile {
    /// Parse config content in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigParse`] when the content is malformed.
    pub fn parse(content: &str, format: ConfigFormat, path: &Path) -> ScrapeResult<Self> {
        let parsed: Result<Self, String> = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ScrapeError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load a config file, tolerating a missing file or an unknown format.
    ///
    /// `format` overrides detection by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::ConfigParse`] when the file exists but is malformed.
    pub fn load(path: &Path, format: Option<ConfigFormat>) -> ScrapeResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file not read, continuing without it");
                return Ok(Self::default());
            }
        };

        let Some(format) = format.or_else(|| ConfigFormat::from_path(path)) else {
            warn!(path = %path.display(), "Unsupported config file format, continuing without it");
            return Ok(Self::default());
        };

        debug!(path = %path.display(), ?format, "Loaded config file");
        Self::parse(&content, format, path)
    }

    /// Overlay `other` on top of `self`. Set, non-empty values in `other` win.
    #[must_use]
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            url: non_empty(other.url).or(self.url),
            file: non_empty_path(other.file).or(self.file),
            mode: non_empty(other.mode).or(self.mode),
            output: non_empty_path(other.output).or(self.output),
            print: match other.print {
                Some(true) => Some(true),
                _ => self.print,
            },
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Validate and turn raw settings into a [`ScrapeConfig`].
    ///
    /// Mode defaults to `text`. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidMode`] for a mode other than `text` or
    /// `xml`, [`ScrapeError::MissingSource`] when neither url nor file is set,
    /// and [`ScrapeError::InvalidUrl`] for an unusable URL.
    pub fn into_config(self) -> ScrapeResult<ScrapeConfig> {
        let mode = non_empty(self.mode)
            .map(|mode| mode.parse::<RenderMode>())
            .transpose()?
            .unwrap_or_default();

        let mut builder = ScrapeConfig::builder()
            .mode(mode)
            .output(non_empty_path(self.output))
            .print(self.print.unwrap_or(false));
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout_secs(secs);
        }

        match (non_empty(self.url), non_empty_path(self.file)) {
            (Some(url), Some(file)) => builder.file(file).url(url).build(),
            (Some(url), None) => builder.url(url).build(),
            (None, Some(file)) => builder.file(file).build(),
            (None, None) => Err(ScrapeError::MissingSource),
        }
    }
}

//! Command-line arguments
//!
//! Flags override the values read from the config file.

use clap::Parser;
use std::path::{Path, PathBuf};

use super::loader::{ConfigFile, ConfigFormat};
use super::types::ScrapeConfig;
use crate::error::ScrapeResult;
use crate::utils::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "tablescrape")]
#[command(version)]
#[command(about = "Extract HTML tables from a web page or local file as JSON", long_about = None)]
pub struct CliArgs {
    /// Config file in json or toml format; pass an empty value to skip it
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Config file type, inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub ctype: Option<ConfigFormat>,

    /// URL to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// HTML file to read; ignored when a URL is given
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Cell format: text or xml (default text)
    #[arg(long)]
    pub mode: Option<String>,

    /// Output file, writes to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the resolved configuration before extracting
    #[arg(long)]
    pub print: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl CliArgs {
    /// Flags expressed as a config layer.
    #[must_use]
    pub fn as_overrides(&self) -> ConfigFile {
        ConfigFile {
            url: self.url.clone(),
            file: self.file.clone(),
            mode: self.mode.clone(),
            output: self.output.clone(),
            print: self.print.then_some(true),
            timeout_secs: self.timeout,
        }
    }

    /// Load the config file, apply the flags and validate the result.
    ///
    /// # Errors
    ///
    /// Propagates config parse and validation errors.
    pub fn resolve(&self) -> ScrapeResult<ScrapeConfig> {
        let base = if self.config.is_empty() {
            ConfigFile::default()
        } else {
            ConfigFile::load(Path::new(&self.config), self.ctype)?
        };

        base.merge(self.as_overrides()).into_config()
    }
}

//! Configuration for a scrape run
//!
//! Settings come from an optional config file (toml or json) overlaid with
//! command-line flags, and are validated into a [`ScrapeConfig`] through a
//! typestate builder.

// Sub-modules
pub mod builder;
pub mod cli;
pub mod getters;
pub mod loader;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithSource};
pub use cli::CliArgs;
pub use loader::{ConfigFile, ConfigFormat};
pub use types::{DocumentSource, ScrapeConfig};

pub mod config;
pub mod dom;
pub mod error;
pub mod output;
pub mod source;
pub mod table;
pub mod utils;

pub use config::{CliArgs, ConfigFile, ConfigFormat, DocumentSource, ScrapeConfig};
pub use dom::{DomNode, NodeKind, parse_html};
pub use error::{ScrapeError, ScrapeResult};
pub use output::write_output;
pub use source::{fetch_document, load_document, read_document};
pub use table::{
    CellRenderer, PlainText, RenderMode, Table, TableBuilder, TaggedMarkup, extract_tables,
    find_tables, tables_to_json,
};

use markup5ever_rcdom::Handle;
use tracing::debug;

/// Parse an HTML document and extract every table as a JSON array.
///
/// # Errors
///
/// Fails only if the parser or the JSON encoder fails.
pub fn extract_json(html: &[u8], mode: RenderMode) -> ScrapeResult<String> {
    debug!(%mode, bytes = html.len(), "Extracting tables");
    let root = parse_html(html)?;
    let renderer = mode.renderer::<Handle>();
    let tables = extract_tables(&root, renderer.as_ref());
    tables_to_json(&tables)
}

/// Load the configured document and return its tables as JSON.
///
/// # Errors
///
/// Fetch, read and parse failures are fatal; no partial output is produced.
pub async fn scrape(config: &ScrapeConfig) -> ScrapeResult<String> {
    let html = load_document(config).await?;
    extract_json(&html, config.mode())
}

/// Full run: optionally print the configuration, scrape, write the output.
///
/// # Errors
///
/// Propagates any error from [`scrape`] or [`write_output`].
pub async fn run(config: &ScrapeConfig) -> ScrapeResult<()> {
    if config.print() {
        println!("{}", config.to_pretty_json()?);
    }

    let json = scrape(config).await?;
    write_output(&json, config.output()).await
}

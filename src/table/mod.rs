//! HTML table extraction
//!
//! Locate every `table` element, rebuild each one with the configured cell
//! renderer, and serialize the records to JSON.

pub mod builder;
pub mod locator;
pub mod renderer;
pub mod types;

pub use builder::TableBuilder;
pub use locator::find_tables;
pub use renderer::{CellRenderer, PlainText, RenderMode, TaggedMarkup};
pub use types::Table;

use tracing::debug;

use crate::dom::DomNode;
use crate::error::ScrapeResult;

/// Extract all tables under `root`, in document order.
pub fn extract_tables<N: DomNode>(root: &N, renderer: &dyn CellRenderer<N>) -> Vec<Table> {
    let nodes = find_tables(root);
    debug!(count = nodes.len(), "Located tables");

    let builder = TableBuilder::new(renderer);
    nodes.iter().map(|node| builder.build(node)).collect()
}

/// Encode tables as a compact JSON array.
pub fn tables_to_json(tables: &[Table]) -> ScrapeResult<String> {
    Ok(serde_json::to_string(tables)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn extracts_each_table_in_document_order() {
        let html = br#"
            <table><tbody><tr><td>first</td></tr></tbody></table>
            <div><table><tr><td>second</td></tr></table></div>
        "#;
        let root = parse_html(html).unwrap();
        let tables = extract_tables(&root, &PlainText);

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].bodys, vec![vec!["first".to_string()]]);
        assert_eq!(tables[1].bodys, vec![vec!["second".to_string()]]);
    }

    #[test]
    fn no_tables_serializes_to_empty_array() {
        assert_eq!(tables_to_json(&[]).unwrap(), "[]");
    }
}

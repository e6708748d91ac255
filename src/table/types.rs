use serde::{Deserialize, Serialize};

/// One reconstructed HTML table.
///
/// Field names on the wire are `Heads` and `Bodys`. Rows are kept exactly as
/// the markup implies and may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells, empty when the table has no `thead`.
    #[serde(rename = "Heads")]
    pub heads: Vec<String>,
    /// Body rows in document order.
    #[serde(rename = "Bodys")]
    pub bodys: Vec<Vec<String>>,
}

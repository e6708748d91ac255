//! Table reconstruction
//!
//! Four markup shapes are recognized:
//!
//! ```text
//! A  table > thead > tr > th*     table > tbody > tr > td*
//! B  table > thead > th*          table > tbody > tr > td*
//! C  table > tbody > tr > td*
//! D  table > tr > td*
//! ```
//!
//! Anything else falls through to the closest of these. `rowspan` is expanded
//! with a sparse per-table carry map keyed by column index; `colspan` is not
//! interpreted and rows are never padded or truncated.

use std::collections::HashMap;

use tracing::debug;

use super::renderer::CellRenderer;
use super::types::Table;
use crate::dom::node_util::first_element;
use crate::dom::{DomNode, Siblings};

/// Value still owed to a column by a `rowspan` cell in an earlier row.
#[derive(Debug, Clone)]
struct Carry {
    remaining: usize,
    value: String,
}

/// Pending `rowspan` values for one table body, keyed by column index.
#[derive(Debug, Default)]
struct CarryMap {
    pending: HashMap<usize, Carry>,
}

impl CarryMap {
    fn is_active(&self, column: usize) -> bool {
        self.pending
            .get(&column)
            .is_some_and(|carry| carry.remaining > 0)
    }

    /// Take one repeat of the carried value at `column`, if any is left.
    fn take(&mut self, column: usize) -> Option<String> {
        let carry = self.pending.get_mut(&column)?;
        if carry.remaining == 0 {
            return None;
        }
        carry.remaining -= 1;
        Some(carry.value.clone())
    }

    fn insert(&mut self, column: usize, remaining: usize, value: String) {
        self.pending.insert(column, Carry { remaining, value });
    }
}

/// Parse a `rowspan` value. Only positive integers count.
fn parse_rowspan(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|span| *span > 0)
}

/// Builds [`Table`] records from `table` elements with an injected renderer.
pub struct TableBuilder<'r, N> {
    renderer: &'r dyn CellRenderer<N>,
}

impl<'r, N: DomNode> TableBuilder<'r, N> {
    pub fn new(renderer: &'r dyn CellRenderer<N>) -> Self {
        Self { renderer }
    }

    /// Reconstruct the header row and body rows of one `table` element.
    pub fn build(&self, table: &N) -> Table {
        let mut result = Table::default();
        let mut top = Siblings::of(table);
        let mut curr = top.next_element();

        if let Some(thead) = curr.take_if(|node| node.has_tag("thead")) {
            curr = top.next_element();
            result.heads = self.header_cells(&thead);
        }

        if let Some(candidate) = curr {
            let container = if candidate.has_tag("tbody") {
                candidate
            } else {
                table.clone()
            };
            result.bodys = self.body_rows(&container);
        }

        debug!(
            headers = result.heads.len(),
            rows = result.bodys.len(),
            "Reconstructed table"
        );
        result
    }

    /// Header cells come from the first `tr` of the thead, or from the thead
    /// itself when it holds `th` cells directly.
    fn header_cells(&self, thead: &N) -> Vec<String> {
        let row = first_element(thead)
            .filter(|node| node.has_tag("tr"))
            .unwrap_or_else(|| thead.clone());

        let mut cells = Siblings::of(&row);
        let mut heads = Vec::new();
        while let Some(th) = cells.next_tagged("th") {
            heads.push(self.renderer.render(&th));
        }
        heads
    }

    fn body_rows(&self, container: &N) -> Vec<Vec<String>> {
        let mut carry = CarryMap::default();
        let mut rows = Siblings::of(container);
        let mut bodys = Vec::new();
        while let Some(tr) = rows.next_tagged("tr") {
            bodys.push(self.reconstruct_row(&tr, &mut carry));
        }
        bodys
    }

    /// Fill one row, injecting carried values before consuming real cells.
    ///
    /// The row ends once there is no real cell left and no active carry at
    /// the current column. A carry sitting past such a gap stays pending.
    fn reconstruct_row(&self, tr: &N, carry: &mut CarryMap) -> Vec<String> {
        let mut cells = Siblings::of(tr);
        let mut cursor = cells.next_tagged("td");
        let mut column = 0;
        let mut row = Vec::new();

        while cursor.is_some() || carry.is_active(column) {
            if let Some(value) = carry.take(column) {
                row.push(value);
            } else if let Some(td) = cursor.take() {
                let value = self.renderer.render(&td);
                if let Some(raw) = td.attr("rowspan") {
                    match parse_rowspan(&raw) {
                        Some(span) => carry.insert(column, span - 1, value.clone()),
                        None => debug!(rowspan = %raw, column, "Ignoring malformed rowspan"),
                    }
                }
                row.push(value);
                cursor = cells.next_tagged("td");
            }
            column += 1;
        }

        row
    }
}

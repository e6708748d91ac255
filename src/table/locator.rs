use crate::dom::DomNode;

/// Collect every `table` element under `root` in document order.
///
/// Pre-order, depth first. The walk keeps descending into a matched table, so
/// nested tables come back as their own entries right after their parent.
pub fn find_tables<N: DomNode>(root: &N) -> Vec<N> {
    let mut tables = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if node.has_tag("table") {
            tables.push(node.clone());
        }
        // Reverse so the leftmost child is popped first.
        stack.extend(node.children().into_iter().rev());
    }

    tables
}

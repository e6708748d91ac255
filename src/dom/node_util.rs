use super::DomNode;

/// Cursor over the children of one node that only ever stops on elements.
///
/// Source markup interleaves whitespace text nodes and comments between tags,
/// so every place that wants "the next tag" goes through here instead of
/// checking node kinds by hand.
pub struct Siblings<N> {
    nodes: Vec<N>,
    pos: usize,
}

impl<N: DomNode> Siblings<N> {
    /// Start before the first child of `parent`.
    pub fn of(parent: &N) -> Self {
        Self {
            nodes: parent.children(),
            pos: 0,
        }
    }

    /// Return the next element sibling, or `None` once the chain ends.
    pub fn next_element(&mut self) -> Option<N> {
        while let Some(node) = self.nodes.get(self.pos) {
            self.pos += 1;
            if node.is_element() {
                return Some(node.clone());
            }
        }
        None
    }

    /// Return the next element sibling tagged `tag`, skipping other elements.
    pub fn next_tagged(&mut self, tag: &str) -> Option<N> {
        while let Some(node) = self.next_element() {
            if node.has_tag(tag) {
                return Some(node);
            }
        }
        None
    }
}

/// First element child of `node`.
pub fn first_element<N: DomNode>(node: &N) -> Option<N> {
    Siblings::of(node).next_element()
}

/// Depth-first traversal event for [`walk`].
pub enum Visit<'a, N> {
    /// An element, before any of its children.
    Open(&'a N),
    /// Any node that is not an element.
    Leaf(&'a N),
    /// An element, after all of its children.
    Close(&'a N),
}

enum Work<N> {
    Enter(N),
    Exit(N),
}

/// Walk the subtree at `root` in document order without recursion.
///
/// Nesting depth is only bounded by memory, not by the thread stack.
pub fn walk<N: DomNode>(root: &N, mut visit: impl FnMut(Visit<'_, N>)) {
    let mut work = vec![Work::Enter(root.clone())];

    while let Some(item) = work.pop() {
        match item {
            Work::Enter(node) if node.is_element() => {
                visit(Visit::Open(&node));
                let children = node.children();
                work.push(Work::Exit(node));
                work.extend(children.into_iter().rev().map(Work::Enter));
            }
            Work::Enter(node) => visit(Visit::Leaf(&node)),
            Work::Exit(node) => visit(Visit::Close(&node)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::test_tree::{comment, element, text};

    #[test]
    fn next_element_skips_text_and_comments() {
        let row = element(
            "tr",
            &[],
            vec![
                text("\n  "),
                element("td", &[], vec![text("a")]),
                comment("gap"),
                text("  "),
                element("th", &[], vec![text("b")]),
                text("\n"),
            ],
        );

        let mut cursor = Siblings::of(&row);
        assert_eq!(cursor.next_element().unwrap().tag_name(), Some("td"));
        assert_eq!(cursor.next_element().unwrap().tag_name(), Some("th"));
        assert!(cursor.next_element().is_none());
        assert!(cursor.next_element().is_none());
    }

    #[test]
    fn next_tagged_skips_other_elements() {
        let row = element(
            "tr",
            &[],
            vec![
                element("th", &[], vec![]),
                text(" "),
                element("td", &[], vec![text("x")]),
                element("th", &[], vec![]),
                element("td", &[], vec![text("y")]),
            ],
        );

        let mut cursor = Siblings::of(&row);
        let first = cursor.next_tagged("td").unwrap();
        assert_eq!(first.children()[0].text().as_deref(), Some("x"));
        let second = cursor.next_tagged("td").unwrap();
        assert_eq!(second.children()[0].text().as_deref(), Some("y"));
        assert!(cursor.next_tagged("td").is_none());
    }

    #[test]
    fn walk_reports_open_leaf_and_close_in_document_order() {
        let cell = element(
            "td",
            &[],
            vec![
                text("a"),
                element("b", &[], vec![text("c")]),
                comment("d"),
            ],
        );

        let mut events = Vec::new();
        walk(&cell, |visit| {
            events.push(match visit {
                Visit::Open(node) => format!("+{}", node.tag_name().unwrap_or_default()),
                Visit::Leaf(node) => node.text().unwrap_or_else(|| "#".to_string()),
                Visit::Close(node) => format!("-{}", node.tag_name().unwrap_or_default()),
            });
        });

        assert_eq!(events, vec!["+td", "a", "+b", "c", "-b", "#", "-td"]);
    }

    #[test]
    fn walk_on_a_leaf_root_visits_it_once() {
        let mut count = 0;
        walk(&text("solo"), |visit| {
            assert!(matches!(visit, Visit::Leaf(_)));
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn first_element_of_childless_or_text_only_node_is_none() {
        assert!(first_element(&element("thead", &[], vec![])).is_none());
        assert!(first_element(&element("thead", &[], vec![text("  ")])).is_none());
    }
}

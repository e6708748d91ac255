//! Cell rendering strategies
//!
//! A renderer turns a cell subtree into the string stored in the table.
//! [`PlainText`] flattens the subtree into readable, space-joined text.
//! [`TaggedMarkup`] keeps the element structure and tag names but drops
//! attributes, concatenating children with no separator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dom::node_util::{Visit, walk};
use crate::dom::{DomNode, NodeKind};
use crate::error::ScrapeError;

/// Converts a node subtree into a display string.
pub trait CellRenderer<N: DomNode> {
    fn render(&self, node: &N) -> String;
}

/// Tag-stripped text, non-empty fragments joined by one space.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

/// Tag-preserving markup without attributes or injected whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedMarkup;

fn leaf_text<N: DomNode>(node: &N) -> String {
    match node.kind() {
        NodeKind::Text => node
            .text()
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

impl<N: DomNode> CellRenderer<N> for PlainText {
    fn render(&self, node: &N) -> String {
        // One parts list per open element; a closed element joins its parts
        // and hands the result to its parent.
        let mut open: Vec<Vec<String>> = Vec::new();
        let mut rendered = String::new();

        walk(node, |visit| {
            let part = match visit {
                Visit::Open(_) => {
                    open.push(Vec::new());
                    return;
                }
                Visit::Leaf(leaf) => leaf_text(leaf),
                Visit::Close(_) => open.pop().unwrap_or_default().join(" "),
            };
            match open.last_mut() {
                Some(parts) if !part.is_empty() => parts.push(part),
                Some(_) => {}
                None => rendered = part,
            }
        });

        rendered
    }
}

impl<N: DomNode> CellRenderer<N> for TaggedMarkup {
    fn render(&self, node: &N) -> String {
        let mut markup = String::new();

        walk(node, |visit| match visit {
            Visit::Open(element) => {
                markup.push('<');
                markup.push_str(element.tag_name().unwrap_or_default());
                markup.push('>');
            }
            Visit::Leaf(leaf) => markup.push_str(&leaf_text(leaf)),
            Visit::Close(element) => {
                markup.push_str("</");
                markup.push_str(element.tag_name().unwrap_or_default());
                markup.push('>');
            }
        });

        markup
    }
}

/// Rendering mode as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Text,
    Xml,
}

impl RenderMode {
    /// Resolve the renderer this mode stands for.
    #[must_use]
    pub fn renderer<N: DomNode>(self) -> Box<dyn CellRenderer<N>> {
        match self {
            RenderMode::Text => Box::new(PlainText),
            RenderMode::Xml => Box::new(TaggedMarkup),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Text => "text",
            RenderMode::Xml => "xml",
        }
    }
}

impl FromStr for RenderMode {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RenderMode::Text),
            "xml" => Ok(RenderMode::Xml),
            other => Err(ScrapeError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

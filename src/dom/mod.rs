//! Read-only view over the parsed document tree
//!
//! The table engine never builds or mutates the tree. It only needs node kind,
//! tag name, text, attributes and ordered children, which is what [`DomNode`]
//! exposes. The production implementation sits on `markup5ever_rcdom`.

pub mod node_util;

#[cfg(test)]
pub(crate) mod test_tree;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{ScrapeError, ScrapeResult};

pub use node_util::Siblings;

/// Coarse node classification used by the renderers and the table builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    /// Doctype and processing instructions
    Other,
}

/// Minimal capability interface over a document tree node.
pub trait DomNode: Clone {
    fn kind(&self) -> NodeKind;

    /// Local tag name, `None` for anything but elements.
    fn tag_name(&self) -> Option<&str>;

    /// Raw character data, `None` for anything but text nodes.
    fn text(&self) -> Option<String>;

    /// Value of the attribute with the given local name.
    fn attr(&self, name: &str) -> Option<String>;

    /// Direct children in document order.
    fn children(&self) -> Vec<Self>;

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// True for an element whose tag name equals `tag`.
    fn has_tag(&self, tag: &str) -> bool {
        self.is_element() && self.tag_name() == Some(tag)
    }
}

impl DomNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            NodeData::Comment { .. } => NodeKind::Comment,
            NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    fn text(&self) -> Option<String> {
        match &self.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().clone()
    }
}

/// Parse an HTML document into an rcdom tree and return its root.
///
/// Input bytes are decoded as UTF-8, replacing invalid sequences.
pub fn parse_html(bytes: &[u8]) -> ScrapeResult<Handle> {
    let mut input = bytes;
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input)
        .map_err(ScrapeError::Parse)?;

    Ok(dom.document)
}

//! Hand-built rcdom trees for unit tests.
//!
//! html5ever normalizes table markup (it always inserts `tbody` and wraps
//! bare `th` cells in a `tr`), so shapes the parser never emits are built here.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NS), LocalName::from(local))
}

fn adopt(parent: &Handle, children: Vec<Handle>) {
    for child in children {
        child.parent.set(Some(Rc::downgrade(parent)));
        parent.children.borrow_mut().push(child);
    }
}

pub(crate) fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<Handle>) -> Handle {
    let attrs = attrs
        .iter()
        .map(|(key, value)| Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(*key)),
            value: StrTendril::from_slice(value),
        })
        .collect();

    let node = Node::new(NodeData::Element {
        name: html_name(tag),
        attrs: RefCell::new(attrs),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    });
    adopt(&node, children);
    node
}

pub(crate) fn text(contents: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(contents)),
    })
}

pub(crate) fn comment(contents: &str) -> Handle {
    Node::new(NodeData::Comment {
        contents: StrTendril::from_slice(contents),
    })
}

pub(crate) fn document(children: Vec<Handle>) -> Handle {
    let node = Node::new(NodeData::Document);
    adopt(&node, children);
    node
}

/// `<td>` with a single text child.
pub(crate) fn td(value: &str) -> Handle {
    element("td", &[], vec![text(value)])
}

/// `<td rowspan=..>` with a single text child.
pub(crate) fn td_span(value: &str, rowspan: &str) -> Handle {
    element("td", &[("rowspan", rowspan)], vec![text(value)])
}

pub(crate) fn th(value: &str) -> Handle {
    element("th", &[], vec![text(value)])
}

pub(crate) fn tr(cells: Vec<Handle>) -> Handle {
    element("tr", &[], cells)
}

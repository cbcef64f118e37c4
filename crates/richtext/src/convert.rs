//! Convert a DOM tree into the rich-text document model
//!
//! Elements carrying the element marker become [`Element`]s, classified by
//! tag name. Text-marked spans become [`Text`] leaves whose marks are found by
//! searching the span's subtree for emphasis tags. Anything else is read as
//! plain text.

use richtext_core::tags::{ELEMENT_NODE, NODE_ATTR, TEXT_NODE, TYPE_ATTR};
use richtext_core::{empty_document, Element, ElementKind, Mark, Node, Text};

use crate::node::{DomNode, MAX_DEPTH};
use crate::utilities::parse_text_align;

/// Convert a DOM tree to a document.
///
/// Never fails; input without usable content yields [`empty_document`].
pub fn convert(root: &DomNode) -> Vec<Node> {
    let nodes = if root.is_element() {
        vec![convert_element(root, 0)]
    } else {
        convert_children(root, 0)
    };

    let document = wrap_root_leaves(nodes);
    if document.is_empty() {
        log::debug!("no content found, starting from an empty document");
        return empty_document();
    }
    document
}

/// Convert the element children of a node; bare text nodes are skipped
fn convert_children(node: &DomNode, depth: usize) -> Vec<Node> {
    node.element_children()
        .map(|child| convert_element(child, depth + 1))
        .collect()
}

fn convert_element(element: &DomNode, depth: usize) -> Node {
    if depth >= MAX_DEPTH {
        log::debug!(
            "<{}> nested past depth {} read as plain text",
            element.tag_name(),
            MAX_DEPTH
        );
        return Node::Text(Text::new(element.text_content()));
    }

    match element.attr(NODE_ATTR) {
        Some(ELEMENT_NODE) => Node::Element(convert_structural(element, depth)),
        Some(TEXT_NODE) => Node::Text(convert_leaf(element)),
        _ => {
            log::debug!("unmarked <{}> read as plain text", element.tag_name());
            Node::Text(Text::new(element.text_content()))
        }
    }
}

fn convert_structural(element: &DomNode, depth: usize) -> Element {
    let tag = element.tag_name();
    let kind = ElementKind::from_tag(tag, element.attr(TYPE_ATTR)).unwrap_or_else(|| {
        log::debug!("unknown element tag <{}> read as paragraph", tag);
        ElementKind::Paragraph
    });
    let caps = kind.capabilities();

    let url = match kind {
        ElementKind::Link => Some(element.attr("href").unwrap_or_default().to_string()),
        ElementKind::Image => Some(element.attr("src").unwrap_or_default().to_string()),
        _ => None,
    };

    let align = if kind.accepts_align() {
        element.attr("style").and_then(parse_text_align)
    } else {
        None
    };

    let children = if caps.void {
        vec![Node::Text(Text::empty())]
    } else {
        let mut children = convert_children(element, depth);
        if children.is_empty() {
            children.push(Node::Text(Text::empty()));
        }
        children
    };

    Element {
        kind,
        align,
        url,
        children,
    }
}

fn convert_leaf(span: &DomNode) -> Text {
    let mut text = Text::new(span.text_content());
    for mark in Mark::ALL {
        text.set(mark, span.has_descendant(mark.tags()));
    }
    text
}

/// Group root-level nodes that are not blocks into paragraphs
fn wrap_root_leaves(nodes: Vec<Node>) -> Vec<Node> {
    let mut document = Vec::with_capacity(nodes.len());
    let mut pending = Vec::new();

    for node in nodes {
        let is_block = matches!(&node, Node::Element(element) if element.kind.is_block());
        if is_block {
            flush_pending(&mut pending, &mut document);
            document.push(node);
        } else {
            pending.push(node);
        }
    }
    flush_pending(&mut pending, &mut document);

    document
}

fn flush_pending(pending: &mut Vec<Node>, document: &mut Vec<Node>) {
    if pending.is_empty() {
        return;
    }
    log::debug!("wrapping {} root-level leaves in a paragraph", pending.len());
    document.push(Node::Element(Element::paragraph(std::mem::take(pending))));
}

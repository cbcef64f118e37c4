//! HTML parsing support.
//!
//! Parses HTML strings with scraper (html5ever) and lowers the result into
//! the [`DomNode`] tree the deserializer reads.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{DomNode, MAX_DEPTH};

/// Parse HTML into a [`DomNode`] fragment holding the document body.
///
/// The input is parsed as a full document so that `<head>` content
/// (`<title>`, `<style>`, `<script>` before the body) never reaches the
/// result. The parser is error-tolerant: malformed markup still yields a tree.
/// Comments, doctypes and processing instructions are dropped. Elements
/// nested deeper than [`MAX_DEPTH`] keep only their text.
///
/// # Example
///
/// ```rust
/// use richtext::{parse_html, RichTextCodec};
///
/// let dom = parse_html(r#"<p data-slate-node="element">Hello</p>"#);
/// assert_eq!(dom.element_children().count(), 1);
///
/// let doc = RichTextCodec::new().deserialize_dom(&dom);
/// assert_eq!(doc.len(), 1);
/// ```
pub fn parse_html(html: &str) -> DomNode {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let body = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "body")
        .unwrap_or(root);

    let mut fragment = DomNode::fragment();
    append_children(body, &mut fragment, 0);
    fragment
}

/// Convert a scraper ElementRef to our DomNode structure
fn scraper_to_node(element: ElementRef, depth: usize) -> DomNode {
    let value = element.value();
    let mut node = DomNode::element_with_attrs(value.name(), value.attrs());
    if depth >= MAX_DEPTH {
        log::debug!("<{}> nested past depth {} flattened", value.name(), MAX_DEPTH);
        node.add_child(DomNode::text(&element.text().collect::<String>()));
    } else {
        append_children(element, &mut node, depth);
    }
    node
}

fn append_children(element: ElementRef, node: &mut DomNode, depth: usize) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(DomNode::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element, depth + 1));
                }
            }
            _ => {}
        }
    }
}

//! HTML serialization
//!
//! Renders a document tree into tagged HTML. The output carries the
//! structural markers from [`crate::tags`] so the parser can rebuild the
//! same tree.

use smallvec::SmallVec;

use crate::ast::{Element, ElementKind, Mark, Node, Text};
use crate::options::{AlignStyle, Options};
use crate::tags::{
    ELEMENT_NODE, INLINE_ATTR, MARK_NESTING, NODE_ATTR, STRING_ATTR, TEXT_NODE, TYPE_ATTR,
    VOID_ATTR,
};

/// Serialize a document tree to an HTML string.
///
/// Never fails. Unknown element kinds render as paragraphs.
pub fn serialize(nodes: &[Node], options: &Options) -> String {
    // Markers dominate the output; text is usually the smaller part
    let mut output = String::with_capacity(nodes.len() * 128);
    for node in nodes {
        serialize_node(node, options, &mut output);
    }
    log::trace!("serialized {} top-level nodes into {} bytes", nodes.len(), output.len());
    output
}

/// Plain text of a document: each top-level node's text, one per line
pub fn serialize_plain_text(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(Node::text_content)
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize_node(node: &Node, options: &Options, out: &mut String) {
    match node {
        Node::Element(element) => serialize_element(element, options, out),
        Node::Text(text) => serialize_text(text, options, out),
    }
}

fn serialize_element(element: &Element, options: &Options, out: &mut String) {
    if element.kind.is_unknown() {
        log::debug!("unknown element kind `{}` rendered as paragraph", element.kind);
    }

    let kind = &element.kind;
    let caps = kind.capabilities();
    let tag = kind.tag_name();

    out.push('<');
    out.push_str(tag);
    push_attr(NODE_ATTR, ELEMENT_NODE, out);

    if caps.inline {
        push_attr(INLINE_ATTR, "true", out);
    }
    if caps.void {
        push_attr(VOID_ATTR, "true", out);
    }
    if let Some(hint) = kind.type_hint() {
        push_attr(TYPE_ATTR, hint, out);
    }
    if caps.read_only {
        push_attr("contenteditable", "false", out);
    }

    match kind {
        ElementKind::Link => push_attr("href", element.url_or_empty(), out),
        ElementKind::Image => push_attr("src", element.url_or_empty(), out),
        _ => {}
    }

    if kind.accepts_align() {
        match (element.align, options.align_style) {
            (Some(align), _) => {
                out.push_str(" style=\"text-align: ");
                out.push_str(align.as_str());
                out.push_str(";\"");
            }
            (None, AlignStyle::Always) => out.push_str(" style=\"text-align: ;\""),
            (None, AlignStyle::OmitUnset) => {}
        }
    }

    out.push('>');

    // Void tags have no content and no end tag
    if caps.void {
        return;
    }

    for child in &element.children {
        serialize_node(child, options, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn serialize_text(text: &Text, options: &Options, out: &mut String) {
    let marks: SmallVec<[Mark; 4]> = MARK_NESTING
        .into_iter()
        .filter(|&mark| text.has(mark))
        .collect();

    out.push_str("<span");
    push_attr(NODE_ATTR, TEXT_NODE, out);
    out.push('>');

    for mark in &marks {
        out.push('<');
        out.push_str(mark.tag());
        out.push('>');
    }

    if options.string_wrapper {
        out.push_str("<span");
        push_attr(STRING_ATTR, "true", out);
        out.push('>');
    }

    escape_into(&text.text, out);

    if options.string_wrapper {
        out.push_str("</span>");
    }

    for mark in marks.iter().rev() {
        out.push_str("</");
        out.push_str(mark.tag());
        out.push('>');
    }

    out.push_str("</span>");
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_into(text, &mut result);
    result
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // HTML parsers replace NUL with U+FFFD anyway
            '\0' => out.push_str("&#xFFFD;"),
            _ => out.push(c),
        }
    }
}

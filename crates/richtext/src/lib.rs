//! # richtext
//!
//! Round-trip rich-text editor documents through HTML.
//!
//! The serializer (from `richtext-core`) writes each element with a
//! `data-slate-node` marker. This crate parses such HTML back into the same
//! document tree, falling back to best-effort reading for foreign markup.
//!
//! ## Design
//!
//! Parsing goes through a small parser-agnostic [`DomNode`] tree:
//!
//! - **Parser agnostic**: Any HTML parser can produce a `DomNode` tree and use
//!   [`RichTextCodec::deserialize_dom`]
//! - **Optional parser**: scraper/html5ever is bundled behind the default
//!   `html` feature
//! - **Total**: Serializing and deserializing never fail; malformed input
//!   degrades to default values
//!
//! ## Example (round trip)
//!
//! ```rust
//! use richtext::{Element, Mark, Node, RichTextCodec, Text};
//!
//! let codec = RichTextCodec::new();
//!
//! let doc = vec![Node::Element(Element::paragraph(vec![
//!     Node::Text(Text::new("Hi").with(Mark::Bold)),
//! ]))];
//!
//! let html = codec.serialize(&doc);
//! assert_eq!(codec.deserialize(&html), doc);
//! ```
//!
//! ## Example (DomNode)
//!
//! ```rust
//! use richtext::{DomNode, ElementKind, RichTextCodec};
//!
//! let heading = DomNode::element_with_attrs("h1", [("data-slate-node", "element")])
//!     .with_child(
//!         DomNode::element_with_attrs("span", [("data-slate-node", "text")])
//!             .with_child(DomNode::text("Hello World")),
//!     );
//!
//! let doc = RichTextCodec::new().deserialize_dom(&heading);
//! assert_eq!(doc[0].as_element().unwrap().kind, ElementKind::HeadingOne);
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{DomNode, DomNodeType};
pub use richtext_core::{
    empty_document, escape_html, validate, Align, AlignStyle, Capabilities, Element,
    ElementClassifier, ElementKind, Mark, ModelError, Node, NodePath, Options, Schema, Text,
};
pub use service::RichTextCodec;
pub use utilities::parse_text_align;

/// Error type for richtext operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Serialize a document with default options
pub fn serialize(nodes: &[Node]) -> String {
    RichTextCodec::new().serialize(nodes)
}

/// Deserialize HTML into a document
#[cfg(feature = "html")]
pub fn deserialize(html: &str) -> Vec<Node> {
    RichTextCodec::new().deserialize(html)
}

//! richtext-core - rich-text document model and HTML serialization
//!
//! This crate provides the document tree exchanged with the host editing
//! framework, the classification table the framework queries, and the
//! serializer that turns a tree into tagged HTML. Parsing the HTML back lives
//! in the `richtext` crate.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────────────┐  serialize   ┌─────────────┐
//! Editor value ───▶│ Document tree │ ───────────▶ │ Tagged HTML │
//!                  │  (Vec<Node>)  │ ◀─────────── │             │
//!                  └───────────────┘   richtext   └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{serialize, Element, Mark, Node, Options, Text};
//!
//! let doc = vec![Node::Element(Element::paragraph(vec![
//!     Node::text("This is "),
//!     Node::Text(Text::new("bold").with(Mark::Bold)),
//!     Node::text(" text."),
//! ]))];
//!
//! let html = serialize(&doc, &Options::default());
//! assert!(html.contains("<strong><span data-slate-string=\"true\">bold</span></strong>"));
//! ```

mod ast;
mod options;
mod schema;
mod serialize;
pub mod tags;

pub use ast::{empty_document, validate, Align, Element, ElementKind, Mark, Node, NodePath, Text};
pub use options::{AlignStyle, Options};
pub use schema::{Capabilities, ElementClassifier, Schema};
pub use serialize::{escape_html, serialize, serialize_plain_text};

/// A document tree that breaks a structural invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("text leaf at root position {0}")]
    TextAtRoot(usize),

    #[error("inline element `{kind}` at root position {index}")]
    InlineAtRoot { index: usize, kind: String },

    #[error("element `{kind}` at {path} has no children")]
    EmptyChildren { path: NodePath, kind: String },

    #[error("void element `{kind}` at {path} must hold exactly one empty text leaf")]
    VoidChildren { path: NodePath, kind: String },

    #[error("element `{kind}` at {path} requires a url")]
    MissingUrl { path: NodePath, kind: String },

    #[error("align set on non-block element `{kind}` at {path}")]
    MisplacedAlign { path: NodePath, kind: String },
}

//! Rich-text document tree
//!
//! This module defines the nodes exchanged with the host editing framework.
//! The serde representation is the framework's JSON value format, so a tree
//! can be handed over as-is:
//!
//! ```json
//! [{ "type": "paragraph", "align": "center", "children": [{ "text": "Hi", "bold": true }] }]
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ModelError;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Block, inline or void element with children
    Element(Element),

    /// Text run carrying formatting marks
    Text(Text),
}

impl Node {
    /// Create a plain text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text::new(text))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Element kinds known to the editor.
///
/// `Unknown` keeps kinds written by newer or foreign editors readable; they
/// render as paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    HeadingFour,
    HeadingFive,
    HeadingSix,
    BlockQuote,
    BulletedList,
    NumberedList,
    ListItem,
    Link,
    Image,
    Button,
    Badge,
    Unknown(String),
}

impl ElementKind {
    /// The `type` string used by the editing framework
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Paragraph => "paragraph",
            ElementKind::HeadingOne => "heading-one",
            ElementKind::HeadingTwo => "heading-two",
            ElementKind::HeadingThree => "heading-three",
            ElementKind::HeadingFour => "heading-four",
            ElementKind::HeadingFive => "heading-five",
            ElementKind::HeadingSix => "heading-six",
            ElementKind::BlockQuote => "block-quote",
            ElementKind::BulletedList => "bulleted-list",
            ElementKind::NumberedList => "numbered-list",
            ElementKind::ListItem => "list-item",
            ElementKind::Link => "link",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Badge => "badge",
            ElementKind::Unknown(kind) => kind,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ElementKind::Unknown(_))
    }
}

impl From<&str> for ElementKind {
    fn from(value: &str) -> Self {
        match value {
            "paragraph" => ElementKind::Paragraph,
            "heading-one" => ElementKind::HeadingOne,
            "heading-two" => ElementKind::HeadingTwo,
            "heading-three" => ElementKind::HeadingThree,
            "heading-four" => ElementKind::HeadingFour,
            "heading-five" => ElementKind::HeadingFive,
            "heading-six" => ElementKind::HeadingSix,
            "block-quote" => ElementKind::BlockQuote,
            "bulleted-list" => ElementKind::BulletedList,
            "numbered-list" => ElementKind::NumberedList,
            "list-item" => ElementKind::ListItem,
            "link" => ElementKind::Link,
            "image" => ElementKind::Image,
            "button" => ElementKind::Button,
            "badge" => ElementKind::Badge,
            other => ElementKind::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ElementKind {
    fn from(value: String) -> Self {
        match ElementKind::from(value.as_str()) {
            ElementKind::Unknown(_) => ElementKind::Unknown(value),
            known => known,
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Unknown(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }

    /// Parse an alignment keyword, case-insensitively.
    ///
    /// Empty and unrecognised values yield `None`, the same as no alignment.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            "justify" => Some(Align::Justify),
            _ => None,
        }
    }
}

// `"align": ""` is how the framework clears an alignment
fn deserialize_align<'de, D>(deserializer: D) -> Result<Option<Align>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Align::parse))
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Only meaningful on block kinds
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_align"
    )]
    pub align: Option<Align>,

    /// Target of a link or source of an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            align: None,
            url: None,
            children,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::new(ElementKind::Paragraph, children)
    }

    pub fn heading_one(children: Vec<Node>) -> Self {
        Self::new(ElementKind::HeadingOne, children)
    }

    pub fn heading_two(children: Vec<Node>) -> Self {
        Self::new(ElementKind::HeadingTwo, children)
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Self::new(ElementKind::BlockQuote, children)
    }

    pub fn bulleted_list(items: Vec<Node>) -> Self {
        Self::new(ElementKind::BulletedList, items)
    }

    pub fn numbered_list(items: Vec<Node>) -> Self {
        Self::new(ElementKind::NumberedList, items)
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Self::new(ElementKind::ListItem, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(ElementKind::Link, children)
        }
    }

    /// Create an image; its only child is the empty placeholder leaf
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(ElementKind::Image, vec![Node::Text(Text::empty())])
        }
    }

    pub fn button(children: Vec<Node>) -> Self {
        Self::new(ElementKind::Button, children)
    }

    pub fn badge(children: Vec<Node>) -> Self {
        Self::new(ElementKind::Badge, children)
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// The url, or `""` when none is set
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// Formatting marks a text run can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    pub const ALL: [Mark; 4] = [Mark::Bold, Mark::Italic, Mark::Underline, Mark::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A text leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a text run with the given marks set
    pub fn marked(text: impl Into<String>, marks: &[Mark]) -> Self {
        let mut result = Self::new(text);
        for &mark in marks {
            result.set(mark, true);
        }
        result
    }

    pub fn with(mut self, mark: Mark) -> Self {
        self.set(mark, true);
        self
    }

    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Code => self.code,
        }
    }

    pub fn set(&mut self, mark: Mark, value: bool) {
        match mark {
            Mark::Bold => self.bold = value,
            Mark::Italic => self.italic = value,
            Mark::Underline => self.underline = value,
            Mark::Code => self.code = value,
        }
    }
}

/// The document an editing session starts from when there is nothing to load:
/// one empty paragraph holding one empty text leaf.
pub fn empty_document() -> Vec<Node> {
    vec![Node::Element(Element::paragraph(vec![Node::Text(
        Text::empty(),
    )]))]
}

/// Index path from the root to a node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(pub Vec<usize>);

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str("]")
    }
}

/// Check the structural invariants of a document tree.
///
/// The root must hold block elements only; void elements hold exactly one
/// empty text leaf; links and images carry a url (non-empty for images);
/// alignment only appears on block kinds; every other element has children.
pub fn validate(nodes: &[Node]) -> Result<(), ModelError> {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Text(_) => return Err(ModelError::TextAtRoot(index)),
            Node::Element(element) if !element.kind.is_block() => {
                return Err(ModelError::InlineAtRoot {
                    index,
                    kind: element.kind.to_string(),
                });
            }
            Node::Element(element) => {
                let mut path = vec![index];
                validate_element(element, &mut path)?;
            }
        }
    }
    Ok(())
}

fn validate_element(element: &Element, path: &mut Vec<usize>) -> Result<(), ModelError> {
    let caps = element.kind.capabilities();
    let error_at = || (NodePath(path.clone()), element.kind.to_string());

    if caps.void {
        let placeholder_only = matches!(
            element.children.as_slice(),
            [Node::Text(leaf)] if leaf.text.is_empty()
        );
        if !placeholder_only {
            let (path, kind) = error_at();
            return Err(ModelError::VoidChildren { path, kind });
        }
    } else if element.children.is_empty() {
        let (path, kind) = error_at();
        return Err(ModelError::EmptyChildren { path, kind });
    }

    let missing_url = match element.kind {
        ElementKind::Image => element.url_or_empty().is_empty(),
        ElementKind::Link => element.url.is_none(),
        _ => false,
    };
    if missing_url {
        let (path, kind) = error_at();
        return Err(ModelError::MissingUrl { path, kind });
    }

    if element.align.is_some() && !element.kind.accepts_align() {
        let (path, kind) = error_at();
        return Err(ModelError::MisplacedAlign { path, kind });
    }

    if caps.void {
        return Ok(());
    }

    for (index, child) in element.children.iter().enumerate() {
        if let Node::Element(child) = child {
            path.push(index);
            validate_element(child, path)?;
            path.pop();
        }
    }
    Ok(())
}

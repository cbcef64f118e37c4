//! Structural markers and tag tables shared by the serializer and the parser.
//!
//! Every element written by [`crate::serialize`] carries
//! `data-slate-node="element"`, every text leaf span `data-slate-node="text"`.
//! The parser relies on these markers to tell document structure apart from
//! arbitrary nested markup.

use crate::ast::{ElementKind, Mark};

/// Attribute holding the structural marker
pub const NODE_ATTR: &str = "data-slate-node";

/// Marker value for element wrappers
pub const ELEMENT_NODE: &str = "element";

/// Marker value for text leaf spans
pub const TEXT_NODE: &str = "text";

/// Attribute on the innermost span around escaped text
pub const STRING_ATTR: &str = "data-slate-string";

pub const INLINE_ATTR: &str = "data-slate-inline";

pub const VOID_ATTR: &str = "data-slate-void";

/// Distinguishes element kinds that share a tag (`button`, `badge`)
pub const TYPE_ATTR: &str = "data-slate-type";

/// Nesting order of mark tags around a text run, outermost first
pub const MARK_NESTING: [Mark; 4] = [Mark::Underline, Mark::Italic, Mark::Code, Mark::Bold];

impl ElementKind {
    /// HTML tag an element of this kind renders as
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Paragraph | ElementKind::Unknown(_) => "p",
            ElementKind::HeadingOne => "h1",
            ElementKind::HeadingTwo => "h2",
            ElementKind::HeadingThree => "h3",
            ElementKind::HeadingFour => "h4",
            ElementKind::HeadingFive => "h5",
            ElementKind::HeadingSix => "h6",
            ElementKind::BlockQuote => "blockquote",
            ElementKind::BulletedList => "ul",
            ElementKind::NumberedList => "ol",
            ElementKind::ListItem => "li",
            ElementKind::Link => "a",
            ElementKind::Image => "img",
            ElementKind::Button | ElementKind::Badge => "span",
        }
    }

    /// Value of [`TYPE_ATTR`] for kinds rendered on a shared tag
    pub fn type_hint(&self) -> Option<&'static str> {
        match self {
            ElementKind::Button => Some("button"),
            ElementKind::Badge => Some("badge"),
            _ => None,
        }
    }

    /// Inverse of [`ElementKind::tag_name`].
    ///
    /// `type_hint` is the element's [`TYPE_ATTR`] value. Returns `None` for
    /// tags the editor never writes.
    pub fn from_tag(tag: &str, type_hint: Option<&str>) -> Option<Self> {
        let kind = match tag.to_ascii_lowercase().as_str() {
            "p" => ElementKind::Paragraph,
            "h1" => ElementKind::HeadingOne,
            "h2" => ElementKind::HeadingTwo,
            "h3" => ElementKind::HeadingThree,
            "h4" => ElementKind::HeadingFour,
            "h5" => ElementKind::HeadingFive,
            "h6" => ElementKind::HeadingSix,
            "blockquote" => ElementKind::BlockQuote,
            "ul" => ElementKind::BulletedList,
            "ol" => ElementKind::NumberedList,
            "li" => ElementKind::ListItem,
            "a" => ElementKind::Link,
            "img" => ElementKind::Image,
            "span" => match type_hint {
                Some("button") => ElementKind::Button,
                Some("badge") => ElementKind::Badge,
                _ => return None,
            },
            _ => return None,
        };
        Some(kind)
    }
}

impl Mark {
    /// Tag the serializer wraps a marked run in
    pub fn tag(self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Code => "code",
        }
    }

    /// Tags that indicate this mark when parsing
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Mark::Bold => &["strong", "b"],
            Mark::Italic => &["em", "i"],
            Mark::Underline => &["u"],
            Mark::Code => &["code"],
        }
    }
}

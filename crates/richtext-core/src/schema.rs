//! Element classification
//!
//! The editing framework asks four questions about every element: is it void,
//! is it inline, is it read-only, can it be selected. The answers depend on
//! the element kind only and live in one table here.

use crate::ast::{Element, ElementKind};

/// Editing capabilities of an element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Content is not text-editable; the single child is a placeholder
    pub void: bool,
    /// Embeddable in running text
    pub inline: bool,
    /// Children accept no structural edits
    pub read_only: bool,
    /// Accepts cursor placement
    pub selectable: bool,
}

impl Capabilities {
    pub const BLOCK: Self = Self {
        void: false,
        inline: false,
        read_only: false,
        selectable: true,
    };

    pub const VOID_BLOCK: Self = Self {
        void: true,
        ..Self::BLOCK
    };

    pub const INLINE: Self = Self {
        inline: true,
        ..Self::BLOCK
    };

    pub const READ_ONLY_INLINE: Self = Self {
        inline: true,
        read_only: true,
        selectable: false,
        ..Self::BLOCK
    };
}

impl ElementKind {
    pub fn capabilities(&self) -> Capabilities {
        match self {
            ElementKind::Image => Capabilities::VOID_BLOCK,
            ElementKind::Link | ElementKind::Button => Capabilities::INLINE,
            ElementKind::Badge => Capabilities::READ_ONLY_INLINE,
            _ => Capabilities::BLOCK,
        }
    }

    /// Block kinds may sit at the root or inside other blocks
    pub fn is_block(&self) -> bool {
        !self.capabilities().inline
    }

    /// Whether `align` means anything on this kind
    pub fn accepts_align(&self) -> bool {
        let caps = self.capabilities();
        !caps.inline && !caps.void
    }
}

/// Read-only classification queried by the editing framework
pub trait ElementClassifier {
    fn is_void(&self, element: &Element) -> bool;
    fn is_inline(&self, element: &Element) -> bool;
    fn is_read_only(&self, element: &Element) -> bool;
    fn is_selectable(&self, element: &Element) -> bool;
}

/// Classifier backed by [`ElementKind::capabilities`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Schema;

impl ElementClassifier for Schema {
    fn is_void(&self, element: &Element) -> bool {
        element.kind.capabilities().void
    }

    fn is_inline(&self, element: &Element) -> bool {
        element.kind.capabilities().inline
    }

    fn is_read_only(&self, element: &Element) -> bool {
        element.kind.capabilities().read_only
    }

    fn is_selectable(&self, element: &Element) -> bool {
        element.kind.capabilities().selectable
    }
}

//! Parser-agnostic DOM tree.
//!
//! The deserializer reads this structure rather than a specific parser's
//! output. The `html` feature lowers scraper/html5ever documents into it;
//! any other parser can do the same and call
//! [`crate::RichTextCodec::deserialize_dom`].

/// Nesting depth past which subtrees are flattened to their text
pub const MAX_DEPTH: usize = 512;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomNodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A DOM node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
    pub node_type: DomNodeType,

    /// Lowercase tag name for elements, `#text` or `#document-fragment` otherwise
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,

    pub children: Vec<DomNode>,
}

impl DomNode {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: DomNodeType::Element,
            node_name: tag_name.to_ascii_lowercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs<'a>(
        tag_name: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: DomNodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a document fragment node
    pub fn fragment() -> Self {
        Self {
            node_type: DomNodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == DomNodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == DomNodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &DomNode> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &DomNode> {
        self.children().filter(|n| n.is_element())
    }

    pub fn add_child(&mut self, child: DomNode) {
        self.children.push(child);
    }

    /// Builder form of [`DomNode::add_child`]
    pub fn with_child(mut self, child: DomNode) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        // Explicit stack: foreign markup can nest arbitrarily deep
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.node_type {
                DomNodeType::Text => out.push_str(node.node_value.as_deref().unwrap_or("")),
                _ => stack.extend(node.children.iter().rev()),
            }
        }
    }

    /// Whether any descendant element (not this node) has one of `tags`
    pub fn has_descendant(&self, tags: &[&str]) -> bool {
        let mut stack: Vec<&DomNode> = self.element_children().collect();
        while let Some(node) = stack.pop() {
            if tags.iter().any(|t| node.node_name.eq_ignore_ascii_case(t)) {
                return true;
            }
            stack.extend(node.element_children());
        }
        false
    }
}

impl Drop for DomNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

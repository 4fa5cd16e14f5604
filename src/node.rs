//! Owned document tree.
//!
//! A fragment is a `Vec<Node>` of sibling roots. Each [`Node`] is either an
//! [`Element`] (tag, attributes, children) or a [`Text`] leaf whose
//! [`TextKind`] tells printable text apart from comments and CDATA.
//!
//! The tree is plain owned data: rewriting consumes nodes and returns new
//! ones, so no node is ever shared between two parents.

/// Attribute carrying the dotted-decimal position index of an element.
pub const NODE_INDEX_ATTR: &str = "node-index";

/// Attribute carrying the content digest of an element.
pub const CONTENT_DIGEST_ATTR: &str = "content-digest";

/// Sub-kind of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Visible character data.
    Plain,
    /// `<!-- ... -->`
    Comment,
    /// `<![CDATA[ ... ]]>`
    CData,
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub kind: TextKind,
    pub content: String,
}

impl Text {
    #[must_use]
    pub fn new(kind: TextKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Same sub-kind, different payload.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(self.kind, content)
    }
}

/// An element with its attributes and children.
///
/// Attributes keep source order. Setting an attribute that already exists
/// replaces its value in place; new attributes are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child appender.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style replacement of all children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if attribute exists.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute value, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Replace all children with a single plain text child, or none at all
    /// when `text` is empty.
    pub fn set_string(&mut self, text: String) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(Text::new(TextKind::Plain, text)));
        }
    }

    /// Tag name compared ASCII case-insensitively.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Concatenated visible text of all descendants, see
    /// [`Node::text_content`].
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// Shorthand for a plain text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(Text::new(TextKind::Plain, content))
    }

    /// Shorthand for a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Text(Text::new(TextKind::Comment, content))
    }

    /// Shorthand for a CDATA node.
    #[must_use]
    pub fn cdata(content: impl Into<String>) -> Self {
        Self::Text(Text::new(TextKind::CData, content))
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Concatenated visible text of this node and its descendants.
    ///
    /// Comments and CDATA sections contribute nothing; tag structure is
    /// discarded.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) if text.kind == TextKind::Plain => out.push_str(&text.content),
            Self::Text(_) => {}
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Pre-order iterator over this node and all of its descendants.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Document-order (pre-order) traversal, see [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }
        Some(node)
    }
}

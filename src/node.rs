//! Canonical XML tree
//!
//! Every render call consumes these types. They are built either by the
//! normalizer from loosely shaped [`Input`](crate::Input) or directly through
//! the builder methods on [`Element`] and [`Node`].

use indexmap::IndexMap;
use std::fmt;

/// Element attributes, kept in insertion order with unique keys
pub type Attributes = IndexMap<String, String>;

/// Leaf payloads that never carry a tag of their own
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leaf {
    /// Escaped on render
    Text(String),
    /// Emitted verbatim, never escaped
    SafeText(String),
    /// Emitted verbatim with no indentation
    Raw(String),
    /// Wrapped in a CDATA section, not escaped
    CData(String),
}

impl Leaf {
    /// Returns the payload without any rendering applied
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::SafeText(s) | Self::Raw(s) | Self::CData(s) => s,
        }
    }
}

/// What sits between the open and close tag of an element
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    #[default]
    Empty,
    /// A single value rendered on the same line as its tags
    Leaf(Leaf),
    /// Child nodes rendered one level deeper
    Children(Vec<Node>),
}

impl Content {
    /// Empty content and a child list with only blank members are treated alike
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Children(children) => children.iter().all(Node::is_blank),
            Self::Leaf(_) => false,
        }
    }
}

/// An XML element
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub content: Content,
}

impl Element {
    /// Create an element with no attributes and no content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Empty,
        }
    }

    /// Set an attribute. Values are stringified; an existing key keeps its
    /// position and takes the new value.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    /// Set several attributes in iteration order
    #[must_use]
    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        for (key, value) in attrs {
            self.attributes.insert(key.into(), value.to_string());
        }
        self
    }

    /// Replace the content with escaped text
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.leaf(Leaf::Text(text.into()))
    }

    /// Replace the content with text that is already valid markup
    #[must_use]
    pub fn safe(self, text: impl Into<String>) -> Self {
        self.leaf(Leaf::SafeText(text.into()))
    }

    #[must_use]
    pub fn raw(self, data: impl Into<String>) -> Self {
        self.leaf(Leaf::Raw(data.into()))
    }

    #[must_use]
    pub fn cdata(self, data: impl Into<String>) -> Self {
        self.leaf(Leaf::CData(data.into()))
    }

    #[must_use]
    pub fn leaf(mut self, leaf: Leaf) -> Self {
        self.content = Content::Leaf(leaf);
        self
    }

    /// Append a child node. A single leaf already set becomes the first child.
    #[must_use]
    pub fn child(self, node: impl Into<Node>) -> Self {
        self.push_children(std::iter::once(node.into()))
    }

    /// Append child nodes in iteration order
    #[must_use]
    pub fn children<I, N>(self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.push_children(nodes.into_iter().map(Into::into))
    }

    /// True when the element renders as `<name/>`
    pub fn is_self_closing(&self) -> bool {
        self.attributes.is_empty() && self.content.is_blank()
    }

    fn push_children(mut self, nodes: impl Iterator<Item = Node>) -> Self {
        let mut children = match std::mem::take(&mut self.content) {
            Content::Empty => Vec::new(),
            Content::Leaf(leaf) => vec![Node::Leaf(leaf)],
            Content::Children(children) => children,
        };
        children.extend(nodes);
        self.content = Content::Children(children);
        self
    }
}

/// External identifier of a DOCTYPE declaration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExternalId {
    System(String),
    Public { public_id: String, system_id: String },
}

impl ExternalId {
    pub fn system(system_id: impl Into<String>) -> Self {
        Self::System(system_id.into())
    }

    pub fn public(public_id: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self::Public {
            public_id: public_id.into(),
            system_id: system_id.into(),
        }
    }
}

/// A DOCTYPE declaration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doctype {
    /// Root element name the declaration applies to
    pub name: String,
    pub external_id: ExternalId,
}

impl Doctype {
    pub fn new(name: impl Into<String>, external_id: ExternalId) -> Self {
        Self {
            name: name.into(),
            external_id,
        }
    }

    pub fn system(name: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self::new(name, ExternalId::system(system_id))
    }

    pub fn public(
        name: impl Into<String>,
        public_id: impl Into<String>,
        system_id: impl Into<String>,
    ) -> Self {
        Self::new(name, ExternalId::public(public_id, system_id))
    }
}

/// A canonical node
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    Leaf(Leaf),
    /// The `<?xml ...?>` prolog, filled in from render options
    XmlDecl,
    Doctype(Doctype),
    /// Siblings rendered one after another with no wrapping tag
    List(Vec<Node>),
}

impl Node {
    pub fn element(name: impl Into<String>) -> Self {
        Self::Element(Element::new(name))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Text(text.into()))
    }

    pub fn safe(text: impl Into<String>) -> Self {
        Self::Leaf(Leaf::SafeText(text.into()))
    }

    pub fn raw(data: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Raw(data.into()))
    }

    pub fn cdata(data: impl Into<String>) -> Self {
        Self::Leaf(Leaf::CData(data.into()))
    }

    pub fn list<I, N>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Self>,
    {
        Self::List(nodes.into_iter().map(Into::into).collect())
    }

    /// Blank nodes are skipped when siblings are joined. A list is blank
    /// when every member is, so nested empty lists render nothing.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::List(nodes) if nodes.iter().all(Self::is_blank))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Doctype> for Node {
    fn from(doctype: Doctype) -> Self {
        Self::Doctype(doctype)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::List(nodes)
    }
}

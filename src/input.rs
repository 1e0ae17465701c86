//! Loosely shaped caller input accepted by the normalizer
//!
//! `Input` mirrors the shapes a caller can hand over without building
//! canonical nodes first: bare strings, names, attribute maps, lists and
//! 1- to 3-item tuples. [`normalize`](crate::normalize) turns it into a
//! [`Node`].

use crate::node::{Doctype, Element, Node};
use indexmap::IndexMap;
use std::fmt;

/// A scalar value used as text content or as an attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Attribute map as supplied by callers, in insertion order
pub type InputAttrs = IndexMap<String, Scalar>;

/// Permissive input shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Absent value, dropped from lists
    Nil,
    /// A bare string: text at the top level, a name at the head of a tuple
    Text(String),
    /// An element name
    Name(String),
    Scalar(Scalar),
    Attrs(InputAttrs),
    /// Sequence of inputs, never wrapped in a tag
    List(Vec<Input>),
    /// `(name)`, `(name, attrs | content)` or `(name, attrs, content)`
    Tuple(Vec<Input>),
    Raw(String),
    Safe(String),
    CData(String),
    /// Already canonical, passed through unchanged
    Node(Node),
}

impl Input {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn raw(data: impl Into<String>) -> Self {
        Self::Raw(data.into())
    }

    pub fn safe(text: impl Into<String>) -> Self {
        Self::Safe(text.into())
    }

    pub fn cdata(data: impl Into<String>) -> Self {
        Self::CData(data.into())
    }

    pub fn attrs<I, K, V>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        Self::Attrs(
            attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Short description of the shape, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Nil => "nil".to_string(),
            Self::Text(s) => format!("string {s:?}"),
            Self::Name(s) => format!("name {s:?}"),
            Self::Scalar(v) => format!("scalar {v}"),
            Self::Attrs(map) => format!("attribute map of {} entries", map.len()),
            Self::List(items) => format!("list of {} items", items.len()),
            Self::Tuple(items) => format!("tuple of {} items", items.len()),
            Self::Raw(_) => "raw data".to_string(),
            Self::Safe(_) => "safe text".to_string(),
            Self::CData(_) => "cdata".to_string(),
            Self::Node(node) => match node {
                Node::Element(e) => format!("element <{}>", e.name),
                Node::Leaf(_) => "leaf node".to_string(),
                Node::XmlDecl => "xml declaration".to_string(),
                Node::Doctype(_) => "doctype".to_string(),
                Node::List(nodes) => format!("node list of {} items", nodes.len()),
            },
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Scalar> for Input {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl From<InputAttrs> for Input {
    fn from(map: InputAttrs) -> Self {
        Self::Attrs(map)
    }
}

impl From<Node> for Input {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Input {
    fn from(element: Element) -> Self {
        Self::Node(Node::Element(element))
    }
}

impl From<Doctype> for Input {
    fn from(doctype: Doctype) -> Self {
        Self::Node(Node::Doctype(doctype))
    }
}

impl<T: Into<Self>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<A: Into<Self>> From<(A,)> for Input {
    fn from((a,): (A,)) -> Self {
        Self::Tuple(vec![a.into()])
    }
}

impl<A: Into<Self>, B: Into<Self>> From<(A, B)> for Input {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Self>, B: Into<Self>, C: Into<Self>> From<(A, B, C)> for Input {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Self::$variant(($conv)(v))
                }
            }

            impl From<$ty> for Input {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from! {
    i8 => Integer(i64::from),
    i16 => Integer(i64::from),
    i32 => Integer(i64::from),
    i64 => Integer(std::convert::identity),
    u8 => Integer(i64::from),
    u16 => Integer(i64::from),
    u32 => Integer(i64::from),
    f32 => Float(f64::from),
    f64 => Float(std::convert::identity),
    bool => Bool(std::convert::identity),
    char => Char(std::convert::identity),
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

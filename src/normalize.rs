//! Normalization of caller input into canonical nodes
//!
//! Dispatch follows the shape of the input: a bare string is text, a name
//! is an empty element, a list is normalized member by member, and tuples
//! are read as `(name)`, `(name, attrs)`, `(name, content)` or
//! `(name, attrs, content)` depending on whether the second item is an
//! attribute map. Malformed shapes fail here rather than during rendering.

use crate::error::{Error, Result};
use crate::input::{Input, InputAttrs};
use crate::node::{Attributes, Content, Doctype, Element, ExternalId, Leaf, Node};
use tracing::{debug, instrument, trace, warn};

const EXPECTED_NODE: &str = "string, name, tuple, list, passthrough marker or node";
const EXPECTED_NAME: &str = "element name";
const EXPECTED_ATTRS: &str = "attribute map or nil";
const EXPECTED_CONTENT: &str = "text, scalar, list, passthrough marker or leaf node";

/// Normalize any accepted input shape into a canonical node.
///
/// A list input becomes a [`Node::List`] and is never wrapped in a tag.
pub fn normalize(input: impl Into<Input>) -> Result<Node> {
    normalize_input(input.into())
}

/// Two-argument form: `attrs_or_content` is read as attributes when it is
/// an attribute map and as content otherwise.
pub fn element(name: impl Into<String>, attrs_or_content: impl Into<Input>) -> Result<Node> {
    element_of_two(name.into(), attrs_or_content.into()).map(Node::Element)
}

/// Three-argument form
pub fn element_with(
    name: impl Into<String>,
    attrs: impl Into<Input>,
    content: impl Into<Input>,
) -> Result<Node> {
    element_of_three(name.into(), attrs.into(), content.into()).map(Node::Element)
}

/// Build a DOCTYPE node
pub fn doctype(name: impl Into<String>, external_id: ExternalId) -> Node {
    Node::Doctype(Doctype::new(name, external_id))
}

/// Build a document: the XML declaration followed by the normalized input.
///
/// A list input is spliced into the document rather than nested, and a
/// leading DOCTYPE node is kept as-is ahead of the root element.
#[instrument(level = "debug", skip_all)]
pub fn document(input: impl Into<Input>) -> Result<Node> {
    let mut nodes = vec![Node::XmlDecl];
    match input.into() {
        Input::List(items) => nodes.extend(normalize_list(items)?),
        other => nodes.push(normalize_input(other)?),
    }
    debug!(nodes = nodes.len(), "document built");
    Ok(Node::List(nodes))
}

/// Document whose root element is built with the two-argument form
#[instrument(level = "debug", skip_all)]
pub fn document_element(
    name: impl Into<String>,
    attrs_or_content: impl Into<Input>,
) -> Result<Node> {
    Ok(Node::List(vec![Node::XmlDecl, element(name, attrs_or_content)?]))
}

/// Document whose root element is built with the three-argument form
#[instrument(level = "debug", skip_all)]
pub fn document_with(
    name: impl Into<String>,
    attrs: impl Into<Input>,
    content: impl Into<Input>,
) -> Result<Node> {
    Ok(Node::List(vec![
        Node::XmlDecl,
        element_with(name, attrs, content)?,
    ]))
}

fn normalize_input(input: Input) -> Result<Node> {
    trace!(shape = %input.describe(), "normalizing");
    match input {
        Input::Text(text) => Ok(Node::text(text)),
        Input::Name(name) => Ok(Node::element(name)),
        Input::Raw(data) => Ok(Node::raw(data)),
        Input::Safe(text) => Ok(Node::safe(text)),
        Input::CData(data) => Ok(Node::cdata(data)),
        Input::Node(node) => Ok(node),
        Input::List(items) => normalize_list(items).map(Node::List),
        Input::Tuple(items) => normalize_tuple(items).map(Node::Element),
        other @ (Input::Nil | Input::Scalar(_) | Input::Attrs(_)) => {
            Err(shape_error(&other, EXPECTED_NODE))
        }
    }
}

fn normalize_list(items: Vec<Input>) -> Result<Vec<Node>> {
    items
        .into_iter()
        .filter(|item| !matches!(item, Input::Nil))
        .map(normalize_input)
        .collect()
}

fn normalize_tuple(items: Vec<Input>) -> Result<Element> {
    if items.is_empty() || items.len() > 3 {
        return Err(shape_error(&Input::Tuple(items), "tuple of 1 to 3 items"));
    }

    let mut items = items.into_iter();
    let name = match items.next() {
        Some(Input::Text(name) | Input::Name(name)) => name,
        Some(other) => return Err(shape_error(&other, EXPECTED_NAME)),
        None => return Err(shape_error(&Input::Tuple(Vec::new()), EXPECTED_NAME)),
    };

    match (items.next(), items.next()) {
        (None, _) => Ok(Element::new(name)),
        (Some(second), None) => element_of_two(name, second),
        (Some(attrs), Some(content)) => element_of_three(name, attrs, content),
    }
}

fn element_of_two(name: String, second: Input) -> Result<Element> {
    match second {
        Input::Attrs(attrs) => Ok(Element {
            name,
            attributes: attributes(attrs),
            content: Content::Empty,
        }),
        content => Ok(Element {
            name,
            attributes: Attributes::new(),
            content: normalize_content(content)?,
        }),
    }
}

fn element_of_three(name: String, attrs: Input, content: Input) -> Result<Element> {
    let attributes = match attrs {
        Input::Attrs(attrs) => attributes(attrs),
        Input::Nil => Attributes::new(),
        other => return Err(shape_error(&other, EXPECTED_ATTRS)),
    };
    Ok(Element {
        name,
        attributes,
        content: normalize_content(content)?,
    })
}

fn normalize_content(content: Input) -> Result<Content> {
    match content {
        Input::Nil => Ok(Content::Empty),
        Input::List(items) => normalize_list(items).map(Content::Children),
        Input::Text(text) | Input::Name(text) => Ok(Content::Leaf(Leaf::Text(text))),
        Input::Scalar(value) => Ok(Content::Leaf(Leaf::Text(value.to_string()))),
        Input::Raw(data) => Ok(Content::Leaf(Leaf::Raw(data))),
        Input::Safe(text) => Ok(Content::Leaf(Leaf::SafeText(text))),
        Input::CData(data) => Ok(Content::Leaf(Leaf::CData(data))),
        Input::Node(Node::Leaf(leaf)) => Ok(Content::Leaf(leaf)),
        Input::Node(Node::List(nodes)) => Ok(Content::Children(nodes)),
        other @ (Input::Node(_) | Input::Tuple(_) | Input::Attrs(_)) => {
            Err(shape_error(&other, EXPECTED_CONTENT))
        }
    }
}

fn attributes(attrs: InputAttrs) -> Attributes {
    attrs
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect()
}

fn shape_error(input: &Input, expected: &str) -> Error {
    let found = input.describe();
    warn!(%found, expected, "rejecting input shape");
    Error::invalid_shape(found, expected)
}

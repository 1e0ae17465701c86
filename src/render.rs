//! Rendering of canonical nodes to XML text

mod escaping;
mod indent;

pub use self::{
    escaping::{escape, escape_attribute},
    indent::{Compact, Indentation, Indented},
};
use crate::error::{Error, ErrorKind, Result};
use crate::node::{Attributes, Content, Doctype, Element, ExternalId, Leaf, Node};
use std::borrow::Cow;
use tracing::{debug, instrument, trace};

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// One node per line, indented by depth
    #[default]
    Indented,
    /// No added whitespace at all
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Compact,
}

impl Format {
    /// The indentation strategy behind this format
    pub fn strategy(self) -> &'static dyn Indentation {
        match self {
            Self::Indented => &Indented,
            Self::Compact => &Compact,
        }
    }
}

/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub format: Format,
    /// Encoding named in the XML declaration
    pub encoding: String,
    /// `standalone` flag of the XML declaration, omitted when unset
    pub standalone: Option<bool>,
    /// Whitespace added per nesting level by the indented format
    pub indent: String,
    /// Overrides the format's line break
    pub line_break: Option<String>,
}

/// Default configuration for rendering
impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::Indented,
            encoding: "UTF-8".to_string(),
            standalone: None,
            indent: "  ".to_string(),
            line_break: None,
        }
    }
}

impl Options {
    /// Defaults with compact output
    pub fn compact() -> Self {
        Self::default().format(Format::Compact)
    }

    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    /// Sets the whitespace used for each nesting level
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = Some(line_break.into());
        self
    }
}

/// Render a node tree to a string
pub fn render(node: &Node, options: &Options) -> Result<String> {
    render_fragments(node, options).map(|fragments| fragments.concat())
}

/// Render a node tree to an ordered list of text fragments.
///
/// Names and passthrough payloads are borrowed from the tree; only escaped
/// text and indentation are allocated. Concatenating the fragments gives
/// the output of [`render`].
#[instrument(level = "debug", skip_all, fields(format = ?options.format))]
pub fn render_fragments<'a>(node: &'a Node, options: &'a Options) -> Result<Vec<Cow<'a, str>>> {
    let mut renderer = Renderer::new(options);
    renderer.node(node, 0)?;
    debug!(fragments = renderer.out.len(), "render complete");
    Ok(renderer.out)
}

struct Renderer<'a> {
    options: &'a Options,
    strategy: &'static dyn Indentation,
    out: Vec<Cow<'a, str>>,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            options,
            strategy: options.format.strategy(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, fragment: impl Into<Cow<'a, str>>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.out.push(fragment);
        }
    }

    fn indent(&mut self, depth: usize) {
        let indent = self.strategy.indent(depth, self.options);
        self.push(indent);
    }

    fn line_break(&mut self) {
        let line_break = self.strategy.line_break(self.options);
        self.push(line_break);
    }

    fn node(&mut self, node: &'a Node, depth: usize) -> Result<()> {
        match node {
            Node::XmlDecl => {
                trace!(depth, "xml declaration");
                Self::check_root(depth, "XML declaration")?;
                self.xml_decl();
            }
            Node::Doctype(doctype) => {
                trace!(depth, name = %doctype.name, "doctype");
                Self::check_root(depth, "DOCTYPE")?;
                self.doctype(doctype);
            }
            Node::Leaf(leaf) => self.leaf(leaf, depth),
            Node::Element(element) => {
                trace!(depth, name = %element.name, "element");
                self.element(element, depth)?;
            }
            Node::List(nodes) => self.siblings(nodes, depth)?,
        }
        Ok(())
    }

    fn check_root(depth: usize, what: &str) -> Result<()> {
        if depth == 0 {
            Ok(())
        } else {
            Err(Error::with_message(
                ErrorKind::MisplacedDeclaration { depth },
                format!("{what} is only allowed at the document root, found at depth {depth}"),
            ))
        }
    }

    fn siblings(&mut self, nodes: &'a [Node], depth: usize) -> Result<()> {
        for (i, node) in nodes.iter().filter(|node| !node.is_blank()).enumerate() {
            if i > 0 {
                self.line_break();
            }
            self.node(node, depth)?;
        }
        Ok(())
    }

    fn xml_decl(&mut self) {
        let options = self.options;
        self.push("<?xml version=\"1.0\" encoding=\"");
        self.push(options.encoding.as_str());
        self.push("\"");
        match options.standalone {
            Some(true) => self.push(" standalone=\"yes\""),
            Some(false) => self.push(" standalone=\"no\""),
            None => {}
        }
        self.push("?>");
    }

    fn doctype(&mut self, doctype: &'a Doctype) {
        self.push("<!DOCTYPE ");
        self.push(doctype.name.as_str());
        match &doctype.external_id {
            ExternalId::System(system_id) => {
                self.push(" SYSTEM \"");
                self.push(system_id.as_str());
            }
            ExternalId::Public {
                public_id,
                system_id,
            } => {
                self.push(" PUBLIC \"");
                self.push(public_id.as_str());
                self.push("\" \"");
                self.push(system_id.as_str());
            }
        }
        self.push("\">");
    }

    /// Leaves standing on their own line; raw data skips indentation
    fn leaf(&mut self, leaf: &'a Leaf, depth: usize) {
        if !matches!(leaf, Leaf::Raw(_)) {
            self.indent(depth);
        }
        self.inline(leaf);
    }

    fn inline(&mut self, leaf: &'a Leaf) {
        match leaf {
            Leaf::Text(text) => self.push(escape(text)),
            Leaf::SafeText(_) | Leaf::Raw(_) => self.push(leaf.as_str()),
            Leaf::CData(data) => {
                self.push("<![CDATA[");
                self.push(data.as_str());
                self.push("]]>");
            }
        }
    }

    fn element(&mut self, element: &'a Element, depth: usize) -> Result<()> {
        self.indent(depth);
        self.push("<");
        self.push(element.name.as_str());
        self.attributes(&element.attributes);

        if element.is_self_closing() {
            self.push("/>");
            return Ok(());
        }
        self.push(">");

        match &element.content {
            Content::Leaf(leaf) => self.inline(leaf),
            Content::Children(children) if !element.content.is_blank() => {
                self.line_break();
                self.siblings(children, depth + 1)?;
                self.line_break();
                self.indent(depth);
            }
            Content::Empty | Content::Children(_) => {}
        }

        self.push("</");
        self.push(element.name.as_str());
        self.push(">");
        Ok(())
    }

    fn attributes(&mut self, attributes: &'a Attributes) {
        for (key, value) in attributes {
            self.push(" ");
            self.push(key.as_str());
            self.push("=\"");
            self.push(escape_attribute(value));
            self.push("\"");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_concat_to_render() -> Result<()> {
        let node = Node::from(Element::new("a").attr("x", "1").text("b & c"));
        let options = Options::default();
        let fragments = render_fragments(&node, &options)?;
        assert!(fragments.len() > 1);
        assert_eq!(fragments.concat(), render(&node, &options)?);
        Ok(())
    }

    #[test]
    fn test_names_are_borrowed() -> Result<()> {
        let node = Node::element("person");
        let options = Options::default();
        let fragments = render_fragments(&node, &options)?;
        assert!(fragments
            .iter()
            .any(|f| matches!(f, Cow::Borrowed("person"))));
        Ok(())
    }

    #[test]
    fn test_format_strategy() {
        let options = Options::default();
        assert_eq!(Format::Indented.strategy().line_break(&options), "\n");
        assert_eq!(Format::Compact.strategy().line_break(&options), "");
    }
}

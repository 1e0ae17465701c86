//! xmlbuilder: build XML text from Rust data instead of string concatenation
//!
//! This crate provides functionality to:
//! - Normalize loosely shaped input (names, strings, tuples, lists) into a
//!   canonical node tree
//! - Build documents with an XML declaration and an optional DOCTYPE
//! - Render trees as indented or compact XML with correct escaping
//!
//! # Examples
//! ```
//! use xmlbuilder::{document_element, render, Options, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = document_element("person", "Josh")?;
//!     let xml = render(&doc, &Options::default())?;
//!     assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<person>Josh</person>");
//!
//!     let compact = render(&doc, &Options::compact())?;
//!     assert_eq!(compact, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><person>Josh</person>");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod node;
pub mod normalize;
pub mod render;

// Re-exports
pub use error::{Error, ErrorKind, Result};
pub use input::{Input, InputAttrs, Scalar};
pub use node::{Attributes, Content, Doctype, Element, ExternalId, Leaf, Node};
pub use normalize::{
    doctype, document, document_element, document_with, element, element_with, normalize,
};
pub use render::{render, render_fragments, Format, Options};

/// Render with the default options
pub fn to_string(node: &Node) -> Result<String> {
    render(node, &Options::default())
}

/// Render without any added whitespace
pub fn to_compact_string(node: &Node) -> Result<String> {
    render(node, &Options::compact())
}

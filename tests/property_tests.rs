#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

//! Property-based tests for rendering
//!
//! These tests use proptest to verify:
//! 1. Escaped text unescapes back to the input text with an XML unescaper
//! 2. Compact output is indented output without line breaks and indentation
//! 3. Blank elements always self-close, passthrough payloads are untouched

use proptest::prelude::*;
use quick_xml::escape::unescape;
use xmlbuilder::render::{escape, escape_attribute};
use xmlbuilder::{render, to_compact_string, to_string, Element, Format, Node, Options};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

/// Text with no whitespace, so indentation is the only leading space on a line
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9&<>\"'.;]{0,12}"
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        arb_name().prop_map(Node::element),
        (arb_name(), arb_text()).prop_map(|(name, text)| Node::from(Element::new(name).text(text))),
        (arb_name(), arb_name(), arb_text())
            .prop_map(|(name, key, value)| Node::from(Element::new(name).attr(key, value))),
        arb_text().prop_map(Node::text),
    ];

    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            (arb_name(), prop::collection::vec(inner.clone(), 0..5))
                .prop_map(|(name, children)| Node::from(Element::new(name).children(children))),
            prop::collection::vec(inner, 0..4).prop_map(Node::List),
        ]
    })
}

proptest! {
    /// Any text survives escaping and XML unescaping unchanged
    #[test]
    fn escaped_text_unescapes(text in any::<String>()) {
        let escaped = escape(&text);
        prop_assert_eq!(unescape(&escaped).unwrap(), text.as_str());
    }

    /// Attribute values survive the narrow escape rule too
    #[test]
    fn escaped_attribute_unescapes(value in "[^&<\"]{0,10}|.*[&<\"].*") {
        let escaped = escape_attribute(&value);
        prop_assert!(!escaped.contains('"'));
        if value.contains(['&', '<', '"']) {
            prop_assert_eq!(unescape(&escaped).unwrap(), value.as_str());
        } else {
            prop_assert_eq!(&*escaped, value.as_str());
        }
    }

    /// Element text content renders as an escaped body between its tags
    #[test]
    fn element_text_roundtrip(name in arb_name(), text in any::<String>()) {
        let node = Node::from(Element::new(name.clone()).text(text.clone()));
        let xml = to_compact_string(&node).unwrap();
        let open = format!("<{name}>");
        let close = format!("</{name}>");
        let body = xml
            .strip_prefix(open.as_str())
            .and_then(|rest| rest.strip_suffix(close.as_str()))
            .unwrap();
        prop_assert_eq!(unescape(body).unwrap(), text.as_str());
    }

    /// Blank elements self-close in every format
    #[test]
    fn blank_elements_self_close(name in arb_name()) {
        let node = Node::element(name.clone());
        for format in [Format::Indented, Format::Compact] {
            let options = Options::default().format(format);
            prop_assert_eq!(render(&node, &options).unwrap(), format!("<{name}/>"));
        }
    }

    /// Safe and raw payloads come out byte for byte at any depth
    #[test]
    fn passthrough_is_verbatim(payload in any::<String>(), depth in 0usize..6) {
        for leaf in [Node::raw(payload.clone()), Node::safe(payload.clone())] {
            let mut node = leaf;
            for _ in 0..depth {
                node = Node::from(Element::new("w").child(node));
            }
            let expected = format!("{}{}{}", "<w>".repeat(depth), payload, "</w>".repeat(depth));
            prop_assert_eq!(to_compact_string(&node).unwrap(), expected);
            prop_assert!(to_string(&node).unwrap().contains(payload.as_str()));
        }
    }

    /// Compact output equals indented output with layout whitespace removed
    #[test]
    fn compact_is_indented_without_whitespace(node in arb_node()) {
        let indented = to_string(&node).unwrap();
        let compact = to_compact_string(&node).unwrap();
        let stripped: String = indented.split('\n').map(str::trim_start).collect();
        prop_assert_eq!(stripped, compact);
    }
}

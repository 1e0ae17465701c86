#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlbuilder::{render, Element, Node, Options};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let node = Node::from(
            Element::new("root")
                .attr("value", s)
                .child(Element::new("text").text(s))
                .child(Node::cdata(s)),
        );
        for options in [Options::default(), Options::compact()] {
            let _ = render(&node, &options);
        }
    }
});

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmlbuilder::{document, render, render_fragments, Element, Input, Node, Options};

fn catalog(items: usize) -> Node {
    let books = (0..items).map(|i| {
        Element::new("book")
            .attr("id", i)
            .attr("lang", "en")
            .child(Element::new("title").text(format!("Title {i} & \"friends\"")))
            .child(Element::new("price").text("12.50"))
            .child(Element::new("note").cdata("<b>raw</b>"))
    });
    Node::from(Element::new("catalog").children(books))
}

fn catalog_input(items: u32) -> Input {
    let books: Vec<Input> = (0..items)
        .map(|i| {
            Input::from((
                Input::name("book"),
                Input::attrs([("id", i)]),
                vec![
                    Input::from((Input::name("title"), format!("Title {i}"))),
                    Input::from((Input::name("price"), 12.5)),
                ],
            ))
        })
        .collect();
    Input::from((Input::name("catalog"), books))
}

fn bench_render_indented(c: &mut Criterion) {
    let node = catalog(500);
    let options = Options::default();

    c.bench_function("render_indented", |b| {
        b.iter(|| render(black_box(&node), &options).unwrap())
    });
}

fn bench_render_compact(c: &mut Criterion) {
    let node = catalog(500);
    let options = Options::compact();

    c.bench_function("render_compact", |b| {
        b.iter(|| render(black_box(&node), &options).unwrap())
    });
}

fn bench_render_fragments(c: &mut Criterion) {
    let node = catalog(500);
    let options = Options::default();

    c.bench_function("render_fragments", |b| {
        b.iter(|| render_fragments(black_box(&node), &options).unwrap().len())
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_document", |b| {
        b.iter(|| document(black_box(catalog_input(500))).unwrap())
    });
}

criterion_group!(
    benches,
    bench_render_indented,
    bench_render_compact,
    bench_render_fragments,
    bench_normalize
);
criterion_main!(benches);

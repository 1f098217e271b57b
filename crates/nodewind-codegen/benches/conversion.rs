//! Conversion and rendering benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::executor::block_on;
use nodewind_codegen::{MarkupGenerator, NodeConverter, StaticDefinitions, StyleConfig, TsxGenerator};
use nodewind_core::VisualNode;

fn list(rows: usize) -> VisualNode {
    VisualNode::frame("List")
        .with_size(375.0, 812.0)
        .with_layout("VERTICAL", 12.0)
        .with_padding(16.0, 16.0, 16.0, 16.0)
        .with_children((0..rows).map(|i| {
            VisualNode::frame(format!("Row {i}"))
                .with_size(343.0, 56.0)
                .with_layout("HORIZONTAL", 8.0)
                .with_alignment("SPACE_BETWEEN", "CENTER")
                .with_children([
                    VisualNode::instance("icon", "icon").with_size(24.0, 24.0),
                    VisualNode::text(format!("Item {i}")).with_font(16.0, "Medium"),
                    VisualNode::instance("action", "button").with_child(VisualNode::text("Open")),
                ])
        }))
}

fn converter() -> NodeConverter<StaticDefinitions> {
    let provider = StaticDefinitions::new()
        .with_definition("icon", "icn chevron")
        .with_definition("button", "Button/Ghost/Small");
    NodeConverter::new(StyleConfig::default(), provider).unwrap()
}

fn convert_list(c: &mut Criterion) {
    let converter = converter();
    let root = list(100);
    c.bench_function("convert_list_100", |b| {
        b.iter(|| block_on(converter.convert_node(black_box(&root))))
    });
}

fn render_list(c: &mut Criterion) {
    let tree = block_on(converter().convert_node(&list(100))).unwrap();
    let generator = TsxGenerator::new();
    c.bench_function("render_list_100", |b| b.iter(|| generator.generate(black_box(&tree))));
}

criterion_group!(benches, convert_list, render_list);
criterion_main!(benches);

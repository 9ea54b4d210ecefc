use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luco::Node;

const FLAT: &str = "name = \"cat\"\nage = 5\nsmol = true\nweight = 4.2\nnickname = \"meow meow\"\n";

fn sample_document(members: usize) -> String {
    let mut doc = String::new();
    doc.push_str("meta {\n");
    for i in 0..members {
        doc.push_str(&format!("    field_{i} = {i}\n"));
    }
    doc.push_str("}\n");
    doc.push_str("tags {\n    \"a\"\n    \"b\"\n    \"c\"\n    5\n    true\n}\n");
    doc
}

fn parse_flat_object(c: &mut Criterion) {
    c.bench_function("parse_flat_object", |b| {
        b.iter(|| Node::parse(black_box(FLAT)).unwrap());
    });
}

fn parse_nested_document(c: &mut Criterion) {
    let doc = sample_document(200);
    c.bench_function("parse_nested_document_200_fields", |b| {
        b.iter(|| Node::parse(black_box(&doc)).unwrap());
    });
}

fn roundtrip_serialize(c: &mut Criterion) {
    let doc = sample_document(200);
    let node = Node::parse(&doc).unwrap();
    c.bench_function("serialize_to_luco_200_fields", |b| {
        b.iter(|| node.to_luco_string(&Default::default()));
    });
}

criterion_group!(benches, parse_flat_object, parse_nested_document, roundtrip_serialize);
criterion_main!(benches);

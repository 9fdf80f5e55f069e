use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hello_world::core::layout;
use hello_world::types::LayoutParams;

const SNIPPET: &str = "fn main() {\n\tlet greeting = \"你好，世界\";\n\tprintln!(\"{}\", greeting);\n}\n";

fn bench_layout_moving(c: &mut Criterion) {
    let params = LayoutParams::default();
    c.bench_function("layout_snippet_mid_animation", |b| {
        b.iter(|| layout(black_box(SNIPPET), black_box(80), 120, &params))
    });
}

fn bench_layout_settled(c: &mut Criterion) {
    let params = LayoutParams::default();
    c.bench_function("layout_snippet_settled", |b| {
        b.iter(|| layout(black_box(SNIPPET), black_box(10_000), 120, &params))
    });
}

criterion_group!(benches, bench_layout_moving, bench_layout_settled);
criterion_main!(benches);

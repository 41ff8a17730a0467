//! Benchmarks comparing marklite rendering vs pulldown-cmark (Markdown)
//!
//! Run with: cargo bench -p marklite-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use marklite_core::Compiler;
use pulldown_cmark::{html, Options, Parser};

/// Sample document exercising every supported construct
const SAMPLE: &str = r#"# Introduction

This is a paragraph with *emphasis*, **strong text**, and ***both***.

## Links

Visit [Example](http://example.com) and [Docs](http://docs.example.com).

### Details

A plain paragraph line with no inline markup at all.
Another paragraph holding a [reference](http://ref.example.com) and *one* span.
"#;

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    // Whole-buffer re-scanning makes marklite quadratic in document
    // length, so keep the scaled inputs modest.
    for &copies in &[1usize, 8, 32] {
        let input = SAMPLE.repeat(copies);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("marklite", copies), &input, |b, input| {
            b.iter(|| {
                let compiler = Compiler::new(black_box(input.as_str())).unwrap();
                black_box(compiler.compile())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("pulldown-cmark", copies),
            &input,
            |b, input| {
                b.iter(|| {
                    let parser = Parser::new_ext(black_box(input.as_str()), Options::empty());
                    let mut out = String::new();
                    html::push_html(&mut out, parser);
                    black_box(out)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);

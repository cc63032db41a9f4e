//! Benchmarks for page rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prompt_cheatsheet::model::{Catalog, TechniqueRecord};
use prompt_cheatsheet::render::{
    create_renderer, render_cards, render_table, Page, RenderConfig, RenderFormat,
};
use std::hint::black_box;

/// Catalog of `n` records cycling through the built-in texts.
fn synthetic_catalog(n: usize) -> Catalog {
    let builtin = Catalog::builtin();
    let records = (0..n)
        .map(|i| {
            let src = &builtin.records()[i % builtin.len()];
            TechniqueRecord::new(
                i as u32 + 1,
                src.name.to_string(),
                src.definition.to_string(),
                src.rationale.to_string(),
                src.example.to_string(),
            )
        })
        .collect();
    Catalog::from_records(records)
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    for n in [9, 100, 1000] {
        let catalog = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::new("table", n), &catalog, |b, catalog| {
            b.iter(|| render_table(black_box(catalog.records())));
        });
        group.bench_with_input(BenchmarkId::new("cards", n), &catalog, |b, catalog| {
            b.iter(|| render_cards(black_box(catalog.records())));
        });
    }
    group.finish();
}

fn bench_formats(c: &mut Criterion) {
    let page = Page::default();
    let config = RenderConfig {
        terminal_width: Some(120),
        colored: false,
        ..RenderConfig::default()
    };
    let mut group = c.benchmark_group("formats");
    for format in [
        RenderFormat::Html,
        RenderFormat::Markdown,
        RenderFormat::Json,
        RenderFormat::Csv,
        RenderFormat::Table,
    ] {
        let renderer = create_renderer(format);
        group.bench_function(format.to_string(), |b| {
            b.iter(|| renderer.render(black_box(&page), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_views, bench_formats);
criterion_main!(benches);

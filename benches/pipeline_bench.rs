//! Benchmarks for the epimap render pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use epimap::dataset::{CountryAliases, Dataset};
use epimap::filter::{FilterSelection, YearRange};
use epimap::render::render;

fn bench_dataset_load(c: &mut Criterion) {
    let aliases = CountryAliases::default();

    c.bench_function("dataset_load", |b| {
        b.iter(|| Dataset::load(black_box(&aliases)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let dataset = Dataset::load(&CountryAliases::default());
    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(dataset.len() as u64));

    let unrestricted = FilterSelection::unrestricted(&dataset);
    group.bench_function("unrestricted", |b| {
        b.iter(|| dataset.filter(black_box(&unrestricted)))
    });

    let mut continent = FilterSelection::unrestricted(&dataset);
    continent.continent = Some("Africa".to_string());
    group.bench_function("by_continent", |b| {
        b.iter(|| dataset.filter(black_box(&continent)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let dataset = Dataset::load(&CountryAliases::default());
    let mut group = c.benchmark_group("render");

    let unrestricted = FilterSelection::unrestricted(&dataset);
    group.bench_function("full_dataset", |b| {
        b.iter(|| render(black_box(&dataset), black_box(&unrestricted)))
    });

    let narrow = FilterSelection {
        continent: Some("Africa".to_string()),
        condition_type: Some("INFECTIOUS DISEASES".to_string()),
        years: YearRange::new(2015, 2020),
    };
    group.bench_function("narrow_selection", |b| {
        b.iter(|| render(black_box(&dataset), black_box(&narrow)))
    });

    group.finish();
}

criterion_group!(benches, bench_dataset_load, bench_filter, bench_render);
criterion_main!(benches);

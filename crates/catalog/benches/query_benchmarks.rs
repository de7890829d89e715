use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use shanga_catalog::{CatalogQuery, CatalogSnapshot, Category, Price, Product, Slug, SortKey};
use shanga_core::{CategoryId, ProductId};

const SLUGS: [&str; 5] = ["bracelets", "necklaces", "bangles", "waist-beads", "couple-sets"];

/// Deterministic catalog of `size` products spread across five categories.
fn generate_catalog(size: usize) -> CatalogSnapshot {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let categories = SLUGS
        .iter()
        .enumerate()
        .map(|(i, slug)| {
            Category::new(
                CategoryId::new(format!("c{i}")).unwrap(),
                *slug,
                Slug::parse(*slug).unwrap(),
            )
        })
        .collect();
    let products = (0..size)
        .map(|i| {
            Product::new(
                ProductId::new(i.to_string()).unwrap(),
                format!("Bead piece {}", (i * 7919) % size.max(1)),
                Price(((i * 37) % 9000) as u64),
                epoch + Duration::minutes((i * 13 % 5000) as i64),
            )
            .with_category_slug(SLUGS[i % SLUGS.len()])
            .with_featured(i % 4 == 0)
        })
        .collect();
    CatalogSnapshot::new(products, categories).unwrap()
}

fn bench_query_by_sort_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_by_sort_key");
    let snapshot = generate_catalog(10_000);

    for key in SortKey::ALL {
        group.bench_with_input(BenchmarkId::new("all_products", key), &key, |b, &key| {
            let query = CatalogQuery::from_selectors("all", "all", key.as_token());
            b.iter(|| black_box(query.run(&snapshot).count()));
        });
    }

    group.finish();
}

fn bench_filter_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_throughput");

    for size in [100usize, 1_000, 10_000, 100_000].iter() {
        let snapshot = generate_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("necklaces_2000_4000", size), size, |b, _| {
            let query = CatalogQuery::from_selectors("necklaces", "2000-4000", "price-low");
            b.iter(|| black_box(query.run(&snapshot).count()));
        });
    }

    group.finish();
}

fn bench_selector_decoding(c: &mut Criterion) {
    c.bench_function("decode_selectors", |b| {
        b.iter(|| {
            black_box(CatalogQuery::from_selectors(
                black_box("waist-beads"),
                black_box("6000+"),
                black_box("newest"),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_query_by_sort_key,
    bench_filter_throughput,
    bench_selector_decoding
);
criterion_main!(benches);

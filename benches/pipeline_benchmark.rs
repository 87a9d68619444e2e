//! Collection pipeline benchmarks.
//!
//! Compares deriving the visible page from scratch against the memoized
//! pipeline when only the page changes, and measures masonry placement.
//!
//! Run with: cargo bench --bench pipeline_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use patternkit::model::{FilterSet, Item, ItemId, SortDescriptor};
use patternkit::view_state::{derive_view, masonry_layout, CollectionQuery, PipelineCache};

const SIZES: [usize; 3] = [100, 1_000, 10_000];
const PAGE_SIZE: usize = 24;

fn make_items(count: usize) -> Vec<Item> {
    const CATEGORIES: [&str; 4] = ["Tech", "Art", "Food", "Travel"];
    (0..count)
        .map(|i| {
            Item::new(
                ItemId::new(format!("item-{i}")).expect("valid id"),
                format!("Item {i}"),
            )
            .with_attr("category", CATEGORIES[i % CATEGORIES.len()])
            .with_attr("price", ((i * 7919) % 500) as i64)
            .with_attr("in_stock", i % 3 != 0)
        })
        .collect()
}

fn bench_page_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_flip");
    let filters = FilterSet::new().with("category", "Tech");
    let sort = SortDescriptor::desc("price");

    for size in SIZES {
        let items = make_items(size);
        let pages = (size / 4).div_ceil(PAGE_SIZE).max(1);

        group.bench_with_input(BenchmarkId::new("direct", size), &items, |b, items| {
            let mut page = 0;
            b.iter(|| {
                page = page % pages + 1;
                let query = CollectionQuery {
                    filters: &filters,
                    sort: Some(&sort),
                    page,
                    page_size: PAGE_SIZE,
                };
                black_box(derive_view(items, &query).items.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("cached", size), &items, |b, items| {
            let mut cache = PipelineCache::new();
            let mut page = 0;
            b.iter(|| {
                page = page % pages + 1;
                let query = CollectionQuery {
                    filters: &filters,
                    sort: Some(&sort),
                    page,
                    page_size: PAGE_SIZE,
                };
                black_box(cache.view(items, 0, &query).items.len())
            });
        });
    }

    group.finish();
}

fn bench_masonry(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_layout");

    for size in SIZES {
        let heights: Vec<u32> = (0..size).map(|i| 2 + (i * 31 % 7) as u32).collect();
        group.bench_with_input(BenchmarkId::new("columns_4", size), &heights, |b, heights| {
            b.iter(|| black_box(masonry_layout(black_box(heights), 4, 1).height()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_page_flip, bench_masonry);
criterion_main!(benches);

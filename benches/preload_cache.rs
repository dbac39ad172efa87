// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the preload cache.
//!
//! Measures the cost of deduplication itself, with a loader that resolves
//! immediately:
//! - Warming a fresh batch of distinct addresses
//! - Re-requesting addresses that are already resolved
//! - Many concurrent callers for one address

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::application::port::{ImageLoader, LoadOutcome};
use folio::domain::media::DecodedImage;
use folio::media::AssetPreloadCache;
use futures_util::future::{join_all, BoxFuture, FutureExt};
use std::hint::black_box;
use std::sync::Arc;

/// Loader that resolves every address to a 1x1 image.
struct InstantLoader;

impl ImageLoader for InstantLoader {
    fn load(&self, _address: &str) -> BoxFuture<'static, LoadOutcome> {
        let image = DecodedImage::new(1, 1, vec![0; 4]).expect("1x1 RGBA buffer");
        async move { LoadOutcome::Loaded(image) }.boxed()
    }
}

fn addresses(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("images/asset-{i}.webp")).collect()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build runtime")
}

fn bench_warm_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("preload_cache");
    let rt = runtime();

    for count in [16, 128] {
        let batch = addresses(count);
        group.bench_with_input(BenchmarkId::new("warm_fresh", count), &batch, |b, batch| {
            b.iter(|| {
                let cache = AssetPreloadCache::new(Arc::new(InstantLoader));
                rt.block_on(cache.preload_all(batch.iter().map(String::as_str)));
                black_box(cache.stats());
            });
        });
    }

    group.finish();
}

fn bench_resolved_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("preload_cache");
    let rt = runtime();

    let batch = addresses(128);
    let cache = AssetPreloadCache::new(Arc::new(InstantLoader));
    rt.block_on(cache.preload_all(batch.iter().map(String::as_str)));

    group.bench_function("rewarm_resolved_128", |b| {
        b.iter(|| {
            rt.block_on(cache.preload_all(batch.iter().map(String::as_str)));
        });
    });

    group.finish();
}

fn bench_coalesced_callers(c: &mut Criterion) {
    let mut group = c.benchmark_group("preload_cache");
    let rt = runtime();

    group.bench_function("coalesce_64_callers", |b| {
        b.iter(|| {
            let cache = AssetPreloadCache::new(Arc::new(InstantLoader));
            let waits: Vec<_> = (0..64).map(|_| cache.preload("images/hero.webp")).collect();
            rt.block_on(join_all(waits));
            black_box(cache.stats());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_warm_batch,
    bench_resolved_hits,
    bench_coalesced_callers
);
criterion_main!(benches);

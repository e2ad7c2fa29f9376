use asynciter::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("identity", size), size, |b, &size| {
            b.iter(|| {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let items = AsyncIter::from_iterable(0..size).collect().await.unwrap();
                    black_box(items);
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("map", size), size, |b, &size| {
            b.iter(|| {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let items = AsyncIter::from_iterable(0..size)
                        .map(|x: i64| black_box(x * 2))
                        .collect()
                        .await
                        .unwrap();
                    black_box(items);
                })
            });
        });
    }

    group.finish();
}

fn bench_layer_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_depth");

    group.bench_function("filter_map_take", |b| {
        b.iter(|| {
            tokio::runtime::Runtime::new().unwrap().block_on(async {
                let total = AsyncIter::from_sequence(0, 1)
                    .filter(|x| x % 2 == 0)
                    .map(|x| black_box(x * 3))
                    .take(1000)
                    .reduce(0, |acc, x| acc + x)
                    .await
                    .unwrap();
                black_box(total);
            })
        });
    });

    group.bench_function("boxed_filter_map_take", |b| {
        b.iter(|| {
            tokio::runtime::Runtime::new().unwrap().block_on(async {
                let total = AsyncIter::from_sequence(0, 1)
                    .boxed()
                    .filter(|x| x % 2 == 0)
                    .boxed()
                    .map(|x| black_box(x * 3))
                    .boxed()
                    .take(1000)
                    .reduce(0, |acc, x| acc + x)
                    .await
                    .unwrap();
                black_box(total);
            })
        });
    });

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("zip", size), size, |b, &size| {
            b.iter(|| {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    AsyncIter::zip(iter(0..size), iter(0..size)).run().await.unwrap();
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("interleave", size), size, |b, &size| {
            b.iter(|| {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    AsyncIter::interleave(iter(0..size), iter(0..size))
                        .run()
                        .await
                        .unwrap();
                })
            });
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for sample_size in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("replay_10000", sample_size),
            sample_size,
            |b, &sample_size| {
                b.iter(|| {
                    tokio::runtime::Runtime::new().unwrap().block_on(async {
                        AsyncIter::from_sample(iter(0..sample_size), SampleConfig::default())
                            .take(black_box(10000))
                            .run()
                            .await
                            .unwrap();
                    })
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_collect,
    bench_layer_depth,
    bench_combine,
    bench_sample
);
criterion_main!(benches);

use algo_classics::cs::sort::merge_sort::merge_sort;
use algo_classics::cs::sort::quickselect::{kth_largest, kth_largest_by_heap};
use algo_classics::cs::sort::quicksort::quicksort;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

fn random_vec(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xBADCAB1E);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for &len in &[1_000usize, 10_000, 100_000] {
        let data = random_vec(len);

        group.bench_with_input(BenchmarkId::new("quicksort", len), &data, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                quicksort(black_box(&mut v));
            })
        });
        group.bench_with_input(BenchmarkId::new("merge_sort", len), &data, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                merge_sort(black_box(&mut v));
            })
        });
        group.bench_with_input(BenchmarkId::new("std_sort", len), &data, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                black_box(&mut v).sort();
            })
        });
        group.bench_with_input(BenchmarkId::new("std_sort_unstable", len), &data, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                black_box(&mut v).sort_unstable();
            })
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for &len in &[1_000usize, 10_000, 100_000] {
        let data = random_vec(len);
        let median = len / 2;

        group.bench_with_input(BenchmarkId::new("quickselect", len), &data, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                kth_largest(black_box(&mut v), median).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("heap_select", len), &data, |b, d| {
            b.iter(|| kth_largest_by_heap(black_box(d), median).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_selection);
criterion_main!(benches);

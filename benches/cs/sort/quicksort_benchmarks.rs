use algo_classics::cs::sort::quicksort::{quicksort, quicksort_recursive};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

fn random_vec(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort");

    for &len in &[1_000usize, 10_000, 100_000] {
        let random = random_vec(len);
        let mut sorted = random.clone();
        sorted.sort_unstable();
        let reversed: Vec<u64> = sorted.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::new("iterative/random", len), &random, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                quicksort(black_box(&mut v));
            })
        });
        group.bench_with_input(
            BenchmarkId::new("recursive/random", len),
            &random,
            |b, d| {
                b.iter(|| {
                    let mut v = d.clone();
                    quicksort_recursive(black_box(&mut v));
                })
            },
        );
        // random pivots keep the presorted shapes off the quadratic path
        group.bench_with_input(BenchmarkId::new("iterative/sorted", len), &sorted, |b, d| {
            b.iter(|| {
                let mut v = d.clone();
                quicksort(black_box(&mut v));
            })
        });
        group.bench_with_input(
            BenchmarkId::new("iterative/reversed", len),
            &reversed,
            |b, d| {
                b.iter(|| {
                    let mut v = d.clone();
                    quicksort(black_box(&mut v));
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);

//! Criterion micro-benchmarks for push, pop, insert, erase and swap.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pow2vec::Pow2Vec;
use pow2vec_bench::{ascending, changes_workload, filled, replay, STRESS_LEN};

/// Benchmark: push 100K elements onto an empty container.
fn bench_push_back_stress(c: &mut Criterion) {
    c.bench_function("push_back_100k", |b| {
        b.iter(|| {
            let v = ascending(STRESS_LEN as u64);
            black_box(v.capacity());
        });
    });
}

/// Benchmark: pop every element of a 100K container.
fn bench_pop_back_stress(c: &mut Criterion) {
    c.bench_function("pop_back_100k", |b| {
        b.iter_batched(
            || filled(STRESS_LEN),
            |mut v| {
                while let Ok(x) = v.pop_back() {
                    black_box(x);
                }
                v
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: insert 1K elements at the front, shifting the whole tail.
fn bench_front_insert(c: &mut Criterion) {
    c.bench_function("front_insert_1k", |b| {
        b.iter(|| {
            let mut v = Pow2Vec::new();
            for i in 0..1_000u64 {
                v.insert(0, i).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: erase a 10-element range from the middle until 1K remain.
fn bench_erase_range(c: &mut Criterion) {
    c.bench_function("erase_range_100k", |b| {
        b.iter_batched(
            || filled(STRESS_LEN),
            |mut v| {
                while v.len() > 1_000 {
                    let mid = v.len() / 2;
                    v.erase_range(mid, mid + 10).unwrap();
                }
                v
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: swap two 100K containers back and forth.
fn bench_swap(c: &mut Criterion) {
    let mut a = filled(STRESS_LEN);
    let mut b_vec = ascending(STRESS_LEN as u64);
    c.bench_function("swap_100k", |b| {
        b.iter(|| {
            a.swap(&mut b_vec);
            black_box(a.len());
        });
    });
}

/// Benchmark: replay a 10K-step mixed script.
fn bench_mixed_changes(c: &mut Criterion) {
    let actions = changes_workload(42, 10_000);
    c.bench_function("mixed_changes_10k", |b| {
        b.iter(|| {
            let v = replay(&actions);
            black_box(v.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_stress,
    bench_pop_back_stress,
    bench_front_insert,
    bench_erase_range,
    bench_swap,
    bench_mixed_changes
);
criterion_main!(benches);

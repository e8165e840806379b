//! Criterion micro-benchmarks for copies, assignment and comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pow2vec::Pow2Vec;
use pow2vec_bench::{ascending, filled, STRESS_LEN};

/// Benchmark: narrowing clone of a container at half its capacity.
fn bench_narrowing_clone(c: &mut Criterion) {
    let mut v = ascending(STRESS_LEN as u64);
    v.resize(STRESS_LEN / 2).unwrap();
    c.bench_function("narrowing_clone_50k", |b| {
        b.iter(|| {
            let copy = v.clone();
            black_box(copy.capacity());
        });
    });
}

/// Benchmark: copy-and-swap assignment over a populated target.
fn bench_assign(c: &mut Criterion) {
    let source = ascending(STRESS_LEN as u64);
    let mut target = filled(1_000);
    c.bench_function("assign_100k", |b| {
        b.iter(|| {
            target.assign(&source).unwrap();
            black_box(target.len());
        });
    });
}

/// Benchmark: lexicographic comparison of containers differing at the end.
fn bench_compare(c: &mut Criterion) {
    let a = ascending(STRESS_LEN as u64);
    let mut b_vec: Pow2Vec<u64> = a.clone();
    *b_vec.back_mut().unwrap() += 1;
    c.bench_function("compare_100k", |b| {
        b.iter(|| {
            black_box(black_box(&a) < black_box(&b_vec));
            black_box(black_box(&a) == black_box(&b_vec));
        });
    });
}

criterion_group!(benches, bench_narrowing_clone, bench_assign, bench_compare);
criterion_main!(benches);

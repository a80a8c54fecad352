//! Bulk operator benchmarks.
//!
//! Compares the byte-wise `apply_*` operators against a per-bit loop over
//! the indexed API; the byte-wise path should be roughly an order of
//! magnitude faster.
//!
//! Run with: cargo bench --bench bitwise

mod common;

use bitarray::BitArray;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor");

    for size in common::SIZES {
        let a = common::random_bits(size, 0.5);
        let b = common::random_bits(size, 0.3);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bytewise", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| {
                x.apply_xor(black_box(&b)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("per_bit", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| common::naive_xor(&mut x, black_box(&b)));
        });
    }

    group.finish();
}

fn bench_and_or_complement(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    for size in common::SIZES {
        let a = common::random_bits(size, 0.5);
        let b = common::random_bits(size, 0.5);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("and", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| {
                x.apply_and(black_box(&b)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("or", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| {
                x.apply_or(black_box(&b)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("complement", size), &size, |bench, _| {
            let mut x = a.clone();
            bench.iter(|| {
                black_box(x.apply_complement());
            });
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for size in common::SIZES {
        let text = common::random_bits(size, 0.5).to_bit_string();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("from_bit_string", size), &text, |bench, text| {
            bench.iter(|| BitArray::from_bit_string(black_box(text)));
        });

        group.bench_with_input(BenchmarkId::new("to_bit_string", size), &size, |bench, &size| {
            let bits = common::random_bits(size, 0.5);
            bench.iter(|| black_box(&bits).to_bit_string());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_xor, bench_and_or_complement, bench_construction);
criterion_main!(benches);

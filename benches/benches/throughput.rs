//! Sipkey Criterion Benchmark
//!
//! Latency of the byte path and the integer fast paths, plus batch scaling.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sipkey::SipKey;
use std::hint::black_box;

const KB: usize = 1024;

fn random_key() -> SipKey {
    let mut key = [0u8; 16];
    rand::rng().fill(&mut key[..]);
    SipKey::new(key)
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short inputs (hash-table keys, identifiers).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let key = random_key();

    let sizes = [
        (0, "0B"),
        (4, "4B"),
        (8, "8B"),
        (15, "15B"),
        (16, "16B"),
        (32, "32B"),
        (64, "64B"),
        (256, "256B"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| key.digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput for longer messages, where compression dominates.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    let key = random_key();

    let sizes = [(KB, "1KB"), (16 * KB, "16KB"), (256 * KB, "256KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| key.digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: FAST PATHS VS BYTE PATH
// =============================================================================

/// Each tuple fast path next to the byte path on the equivalent encoding.
fn bench_fast_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Fast-Paths");
    let key = random_key();
    let (a, b, x, y) = (0x0A00_0001u64, 0x0A00_0002u64, 51_000u64, 443u64);

    group.bench_function("1x32", |bn| bn.iter(|| key.digest_1x32(black_box(7))));
    group.bench_function("1x32-bytes", |bn| {
        bn.iter(|| key.digest(black_box(&7u32.to_le_bytes())))
    });

    group.bench_function("3x32", |bn| {
        bn.iter(|| key.digest_3x32(black_box(1), black_box(2), black_box(3)))
    });

    group.bench_function("1x64", |bn| bn.iter(|| key.digest_1x64(black_box(a))));
    group.bench_function("2x64", |bn| {
        bn.iter(|| key.digest_2x64(black_box(a), black_box(b)))
    });
    group.bench_function("3x64", |bn| {
        bn.iter(|| key.digest_3x64(black_box(a), black_box(b), black_box(x)))
    });
    group.bench_function("4x64", |bn| {
        bn.iter(|| key.digest_4x64(black_box(a), black_box(b), black_box(x), black_box(y)))
    });

    let mut encoded = Vec::with_capacity(32);
    for w in [a, b, x, y] {
        encoded.extend_from_slice(&w.to_le_bytes());
    }
    group.bench_function("4x64-bytes", |bn| {
        bn.iter(|| key.digest(black_box(&encoded)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 4: SPECIAL OPERATIONS
// =============================================================================

/// Key validation, verification and the hex view.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Special-Operations");

    let mut raw_key = [0u8; 16];
    rand::rng().fill(&mut raw_key[..]);
    let input = b"GET /index.html HTTP/1.1";

    // Slice key, validated on every call
    group.bench_function("slice-key", |b| {
        b.iter(|| sipkey::digest(black_box(&raw_key), black_box(input)))
    });

    // Pre-validated key
    let key = SipKey::new(raw_key);
    group.bench_function("typed-key", |b| b.iter(|| key.digest(black_box(input))));

    // Verification (constant-time)
    let tag = key.digest(input);
    group.bench_function("verify", |b| {
        b.iter(|| key.verify(black_box(input), black_box(&tag)))
    });

    group.bench_function("to-hex", |b| b.iter(|| sipkey::to_hex(black_box(&tag))));

    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH THREAD SCALING
// =============================================================================

/// Batch digest over many short inputs using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(50);

    let key = random_key();
    let count = 100_000;
    let pairs: Vec<(u64, u64)> = (0..count as u64).map(|i| (i, i.rotate_left(17))).collect();
    group.throughput(Throughput::Elements(count as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| key.digest_batch_2x64(black_box(&pairs))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_fast_paths,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);

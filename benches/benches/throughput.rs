//! cipherstep Criterion Benchmark
//!
//! Cost of producing a full trace for each engine. The traces are the point,
//! so every measurement includes building them.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use cipherstep::{rsa, sdes, BitString, Direction, SdesTables};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

fn random_blocks(count: usize) -> Vec<BitString> {
    let mut raw = vec![0u8; count];
    rand::rng().fill(&mut raw[..]);
    raw.iter()
        .map(|&b| BitString::from_value(u64::from(b), 8))
        .collect()
}

// =============================================================================
// BENCHMARK 1: RSA KEY GENERATION
// =============================================================================

/// Brute-force exponent and inverse search across growing moduli.
fn bench_rsa_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-RSA-Keygen");

    let primes = [
        ((3, 11), "n=33"),
        ((61, 53), "n=3233"),
        ((223, 281), "n=62663"),
        ((1009, 1013), "n=1022117"),
    ];

    for ((p, q), name) in primes {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(p, q),
            |b, &(p, q)| b.iter(|| rsa::generate_keys(black_box(p), black_box(q)).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: RSA MESSAGES
// =============================================================================

/// Per-character encryption cost, key generation included.
fn bench_rsa_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-RSA-Messages");

    for len in [1usize, 16, 256] {
        let message: String = "The quick brown fox ".chars().cycle().take(len).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(len),
            &message,
            |b, msg| b.iter(|| rsa::encrypt(black_box(msg), 61, 53).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: S-DES BLOCKS
// =============================================================================

/// Single block, both directions.
fn bench_sdes_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-SDES-Block");
    let key: BitString = "1010000010".parse().unwrap();
    let block: BitString = "10111101".parse().unwrap();
    let tables = SdesTables::standard();

    for direction in [Direction::Encrypt, Direction::Decrypt] {
        group.bench_function(direction.to_string(), |b| {
            b.iter(|| sdes::process(black_box(&block), &key, &tables, direction).unwrap());
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: S-DES BATCHES
// =============================================================================

/// Batch throughput (parallel with the `multithread` feature).
fn bench_sdes_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-SDES-Batch");
    let key: BitString = "0111111101".parse().unwrap();
    let tables = SdesTables::standard();

    for count in [16usize, 256, 4096] {
        let blocks = random_blocks(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(count),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    sdes::process_blocks(black_box(blocks), &key, &tables, Direction::Encrypt)
                        .unwrap()
                })
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
    bench_rsa_keygen,
    bench_rsa_messages,
    bench_sdes_block,
    bench_sdes_batch,
);

criterion_main!(benches);

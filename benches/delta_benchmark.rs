// SPDX-License-Identifier: MIT OR Apache-2.0
// Benchmarks: missing_docs - criterion_group! macro generates undocumentable code
#![allow(missing_docs)]
// Benchmarks: clippy lints relaxed for benchmark code (not production)
#![allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Benchmarks for shallow deltas.
//!
//! Compares keydelta against:
//! - Deep `PartialEq` filtering with serde_json (structural baseline)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keydelta_diff::{compute_delta, compute_delta_by, compute_delta_str};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// Test Data Generation
// =============================================================================

fn flat_object(len: usize, changed_every: usize) -> Value {
    Value::Object(
        (0..len)
            .map(|i| {
                let value = if changed_every != 0 && i % changed_every == 0 {
                    json!(i * 2 + 1)
                } else {
                    json!(i)
                };
                (format!("key{i}"), value)
            })
            .collect(),
    )
}

/// Generate original and updated pairs for delta benchmarks
fn generate_delta_pairs(scenario: &str) -> (Value, Value) {
    match scenario {
        "identical_small" => (flat_object(8, 0), flat_object(8, 0)),
        "identical_large" => (flat_object(5_000, 0), flat_object(5_000, 0)),
        "sparse_change_large" => (flat_object(5_000, 0), flat_object(5_000, 100)),
        "dense_change_large" => (flat_object(5_000, 0), flat_object(5_000, 1)),
        "all_added" => (json!({}), flat_object(1_000, 0)),
        "container_values" => {
            let doc = |n: usize| {
                Value::Object(
                    (0..n)
                        .map(|i| (format!("key{i}"), json!({"id": i, "tags": ["a", "b"]})))
                        .collect(),
                )
            };
            (doc(500), doc(500))
        }
        _ => (json!({}), json!({})),
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_compute_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_delta");

    for scenario in &[
        "identical_small",
        "identical_large",
        "sparse_change_large",
        "dense_change_large",
        "all_added",
        "container_values",
    ] {
        let (original, updated) = generate_delta_pairs(scenario);
        let entries = updated.as_object().map_or(0, Map::len);
        group.throughput(Throughput::Elements(entries as u64));

        group.bench_with_input(
            BenchmarkId::new("keydelta", scenario),
            &(&original, &updated),
            |b, (orig, upd)| {
                b.iter(|| compute_delta(black_box(*orig), black_box(*upd)).unwrap());
            },
        );

        // Baseline: deep equality filter
        group.bench_with_input(
            BenchmarkId::new("deep_eq_filter", scenario),
            &(&original, &updated),
            |b, (orig, upd)| {
                b.iter(|| {
                    let orig = black_box(*orig).as_object().unwrap();
                    black_box(*upd)
                        .as_object()
                        .unwrap()
                        .iter()
                        .filter(|(k, v)| orig.get(*k) != Some(*v))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect::<Map<String, Value>>()
                });
            },
        );
    }

    group.finish();
}

fn bench_compute_delta_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_delta_str");

    for scenario in &["identical_small", "sparse_change_large"] {
        let (original, updated) = generate_delta_pairs(scenario);
        let original = serde_json::to_string(&original).unwrap();
        let updated = serde_json::to_string(&updated).unwrap();
        group.throughput(Throughput::Bytes((original.len() + updated.len()) as u64));

        group.bench_with_input(
            BenchmarkId::new("parse_and_delta", scenario),
            &(&original, &updated),
            |b, (orig, upd)| {
                b.iter(|| compute_delta_str(black_box(orig), black_box(upd)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_compute_delta_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_delta_by");

    for len in [16usize, 1_024, 16_384] {
        let original: HashMap<u64, u64> = (0..len as u64).map(|i| (i, i)).collect();
        let updated: Vec<(u64, u64)> = (0..len as u64)
            .map(|i| (i, if i % 10 == 0 { i + 1 } else { i }))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hashmap", len), &len, |b, _| {
            b.iter(|| {
                let delta: Vec<(u64, u64)> =
                    compute_delta_by(black_box(&original), updated.iter().map(|(k, v)| (k, v)));
                delta
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_delta,
    bench_compute_delta_str,
    bench_compute_delta_by,
);

criterion_main!(benches);

//! Criterion micro-benchmarks for the rule evaluator and update encoding.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lifeweb_bench::{reference_profile, stress_profile};
use lifeweb_core::{live_neighbours, next_generation, step};
use lifeweb_session::envelope::encode_update;

/// Benchmark: Advance the 50x50 reference soup by one generation.
fn bench_step_reference(c: &mut Criterion) {
    let mut world = reference_profile(42);

    c.bench_function("step_50x50", |b| {
        b.iter(|| {
            step(&mut world);
            black_box(&world);
        });
    });
}

/// Benchmark: Advance the 256x256 stress soup by one generation.
fn bench_step_stress(c: &mut Criterion) {
    let mut world = stress_profile(42);

    c.bench_function("step_256x256", |b| {
        b.iter(|| {
            step(&mut world);
            black_box(&world);
        });
    });
}

/// Benchmark: Compute the next grid without replacing the current one.
fn bench_next_generation_reference(c: &mut Criterion) {
    let world = reference_profile(7);

    c.bench_function("next_generation_50x50", |b| {
        b.iter(|| black_box(next_generation(black_box(&world))));
    });
}

/// Benchmark: Count neighbours for every cell, including the wrapped edges.
fn bench_live_neighbours_all(c: &mut Criterion) {
    let world = reference_profile(7);

    c.bench_function("live_neighbours_all_50x50", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for y in 0..50i64 {
                for x in 0..50i64 {
                    total += u32::from(live_neighbours(&world, x, y));
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: Encode one 50x50 generation as an `update` message.
fn bench_encode_update_reference(c: &mut Criterion) {
    let world = reference_profile(3);

    c.bench_function("encode_update_50x50", |b| {
        b.iter(|| black_box(encode_update(black_box(&world), 1).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_stress,
    bench_next_generation_reference,
    bench_live_neighbours_all,
    bench_encode_update_reference
);
criterion_main!(benches);

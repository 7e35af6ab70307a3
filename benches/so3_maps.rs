//! Benchmarks for the SO(3) maps and rotation composition
//!
//! Inputs cover each branch of the logarithmic map so a regression in one of the
//! singular-case paths shows up separately from the generic path.

use criterion::{Criterion, criterion_group, criterion_main};
use lie_rotation::so3::{
    ExpMapMethod, Rotation, exponential_map, exponential_map_with, logarithmic_map,
};
use nalgebra::Vector3;
use std::f64::consts::PI;
use std::hint::black_box;

fn bench_exponential_map(c: &mut Criterion) {
    let aaxis = Vector3::new(0.3, -0.6, 0.9);
    let mut group = c.benchmark_group("exponential_map");
    group.bench_function("closed_form", |b| {
        b.iter(|| exponential_map(black_box(&aaxis)))
    });
    for num_terms in [4, 10, 20] {
        let method = ExpMapMethod::TruncatedSeries(num_terms);
        group.bench_function(format!("truncated_series_{num_terms}"), |b| {
            b.iter(|| exponential_map_with(black_box(&aaxis), method))
        });
    }
    group.finish();
}

fn bench_logarithmic_map(c: &mut Criterion) {
    let axis = Vector3::new(1.0, 2.0, -3.0).normalize();
    let inputs = [
        ("near_zero", exponential_map(&(1e-9 * axis))),
        ("generic", exponential_map(&(1.2 * axis))),
        ("near_pi", exponential_map(&((PI - 1e-8) * axis))),
    ];

    let mut group = c.benchmark_group("logarithmic_map");
    for (name, matrix) in inputs.iter() {
        group.bench_function(*name, |b| b.iter(|| logarithmic_map(black_box(matrix))));
    }
    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let a = Rotation::random();
    let b = Rotation::random();
    let point = Vector3::new(1.0, -2.0, 0.5);

    let mut group = c.benchmark_group("rotation");
    group.bench_function("compose", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
    group.bench_function("compose_inverse", |bench| {
        bench.iter(|| black_box(&a) / black_box(&b))
    });
    group.bench_function("apply_to", |bench| {
        bench.iter(|| black_box(&a).apply_to(black_box(&point)))
    });
    group.bench_function("forced_reproject", |bench| {
        bench.iter(|| {
            let mut rotation = black_box(a);
            rotation.reproject(true);
            rotation
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_exponential_map,
    bench_logarithmic_map,
    bench_composition
);
criterion_main!(benches);

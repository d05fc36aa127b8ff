//! Benchmarks for organizational profiling and team analysis at growing
//! population sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use traitmap::{
    InteractionMatrix, OrganizationalProfileBuilder, TeamCompositionAnalyzer, TraitProfile,
};

/// Deterministic spread of profiles across the scale.
fn population(n: usize) -> Vec<TraitProfile> {
    (0..n)
        .map(|i| {
            let step = |k: usize| 1.0 + ((i * k + 3) % 41) as f64 / 10.0;
            TraitProfile::new(step(7), step(11), step(13), step(17), step(19))
        })
        .collect()
}

fn dense_matrix(n: usize) -> InteractionMatrix {
    InteractionMatrix::new(
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 0.5 }).collect())
            .collect(),
    )
}

fn bench_organizational_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("organizational_profile");
    let builder = OrganizationalProfileBuilder::default();

    for size in [10usize, 100, 1_000, 10_000] {
        let profiles = population(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &profiles, |b, profiles| {
            b.iter(|| builder.build(black_box(profiles), None))
        });
    }
    group.finish();
}

fn bench_interaction_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("organizational_profile_with_matrix");
    let builder = OrganizationalProfileBuilder::default();

    for size in [10usize, 100, 300] {
        let profiles = population(size);
        let matrix = dense_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| builder.build(black_box(&profiles), Some(black_box(&matrix))))
        });
    }
    group.finish();
}

fn bench_team_composition(c: &mut Criterion) {
    let analyzer = TeamCompositionAnalyzer::default();
    let team = population(8);
    c.bench_function("team_composition_8", |b| {
        b.iter(|| analyzer.analyze(black_box(&team), None))
    });
}

criterion_group!(
    benches,
    bench_organizational_profile,
    bench_interaction_matrix,
    bench_team_composition
);
criterion_main!(benches);

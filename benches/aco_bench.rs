//! Criterion benchmarks for the ACO solver.
//!
//! Uses synthetic Euclidean instances so timings measure pure solver
//! overhead, independent of any instance format.

use aco_tsp::{AcoConfig, AcoRunner, DistanceMatrix, PheromoneMatrix, TourBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Euclidean instance with cities on a deterministic pseudo-random layout.
fn euclidean_instance(n: usize) -> DistanceMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = ((i * 73 + 11) % 97) as f64;
            let y = ((i * 151 + 29) % 89) as f64;
            (x, y)
        })
        .collect();

    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        f64::INFINITY
                    } else {
                        let dx = points[i].0 - points[j].0;
                        let dy = points[i].1 - points[j].1;
                        (dx * dx + dy * dy).sqrt()
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).unwrap()
}

fn bench_tour_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_builder");
    for n in [10usize, 25, 50] {
        let distances = euclidean_instance(n);
        let pheromones = PheromoneMatrix::new(n, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let builder = TourBuilder::new(&distances, &pheromones, 1.0, 2.0);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(builder.build(0, &mut rng)));
        });
    }
    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_run");
    group.sample_size(10);
    for n in [10usize, 25] {
        let distances = euclidean_instance(n);
        let config = AcoConfig::default()
            .with_n_ants(10)
            .with_n_iter(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(AcoRunner::run(&distances, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_builder, bench_runner);
criterion_main!(benches);

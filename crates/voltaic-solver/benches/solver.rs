//! Benchmarks for the Gaussian elimination solver.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::{DMatrix, DVector};
use voltaic_solver::{SolverConfig, solve};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_elimination");
    let config = SolverConfig::default();

    for size in [10, 50, 100, 200] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |bencher, &size| {
                // Diagonally dominant matrix (guaranteed non-singular)
                let a = DMatrix::from_fn(size, size, |i, j| {
                    if i == j {
                        (size as f64) + 1.0
                    } else {
                        1.0 / ((i as f64 - j as f64).abs() + 1.0)
                    }
                });
                let rhs = DVector::from_fn(size, |i, _| (i + 1) as f64);

                bencher.iter(|| {
                    solve(black_box(a.clone()), black_box(rhs.clone()), &config).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

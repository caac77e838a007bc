//! Performance benchmarks for the band-profile solvers
//!
//! This benchmark measures the two solver variants separately and how the
//! profile generation scales with grid resolution.
//!
//! # What We're Measuring
//!
//! 1. **Scalar derivation**: the closed-form device quantities. Constant
//!    work, no allocation, independent of the grid.
//! 2. **Full solve**: scalars plus profile sampling. Work is dominated by
//!    filling the energy columns, so it should scale linearly with the
//!    sample count.
//!
//! # Expected Results
//!
//! - Scalar derivation: tens of nanoseconds (a handful of ln/sqrt/exp calls)
//! - Full solve: linear in samples (500 samples ≈ 5× the 100-sample time)
//! - Schottky ≈ homojunction at equal grid sizes (same per-sample work,
//!   one extra column for the vacuum level)
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all solver benchmarks
//! cargo bench --bench solver_performance
//!
//! # Run only homojunction benches
//! cargo bench --bench solver_performance homojunction
//!
//! # Run only Schottky benches
//! cargo bench --bench solver_performance schottky
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use junction_rs::models::{HomojunctionParams, SchottkyParams};
use junction_rs::solver::{GridConfig, HomojunctionSolver, SchottkySolver};

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Benchmark the closed-form scalar derivations
///
/// No grid involved: this isolates the transcendental-function cost of the
/// two variants (two logs and a square root for the homojunction, the full
/// incomplete-ionization chain for the Schottky contact).
fn benchmark_scalar_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scalar Derivation");

    let homo_solver = HomojunctionSolver::silicon();
    let homo_params = HomojunctionParams::new(1e17, 1e16, 150.0, 150.0).unwrap();
    group.bench_function("homojunction", |b| {
        b.iter(|| homo_solver.scalars(black_box(&homo_params)).unwrap());
    });

    let schottky_solver = SchottkySolver::silicon_boron();
    let schottky_params = SchottkyParams::default();
    group.bench_function("schottky", |b| {
        b.iter(|| schottky_solver.scalars(black_box(&schottky_params)).unwrap());
    });

    group.finish();
}

/// Benchmark full homojunction solves over grid sizes
///
/// # Test Configuration
///
/// - **Samples**: 100, 500, 2000, 10000
/// - **Device**: Na = 1e17, Nd = 1e16 cm⁻³, 150 nm per side
///
/// # Expected Scaling
///
/// Linear in samples: zone classification and the parabola evaluation are
/// constant work per sample.
fn benchmark_homojunction_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Homojunction Solve");

    let solver = HomojunctionSolver::silicon();
    let params = HomojunctionParams::new(1e17, 1e16, 150.0, 150.0).unwrap();

    for samples in [100, 500, 2000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| {
                let grid = GridConfig { samples };
                b.iter(|| {
                    solver
                        .solve(black_box(&params), black_box(&grid))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark full Schottky solves over grid sizes
///
/// Same grid sweep as the homojunction bench; the extra vacuum column is the
/// only additional per-sample work.
fn benchmark_schottky_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Schottky Solve");

    let solver = SchottkySolver::silicon_boron();
    let params = SchottkyParams::default();

    for samples in [100, 500, 2000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| {
                let grid = GridConfig { samples };
                b.iter(|| {
                    solver
                        .solve(black_box(&params), black_box(&grid))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scalar_derivation,
    benchmark_homojunction_solve,
    benchmark_schottky_solve
);
criterion_main!(benches);

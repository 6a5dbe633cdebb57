//! Performance benchmarks for stepping strategies
//!
//! Compares Forward Euler and RK4 on identical epidemic problems to measure
//! their relative cost.
//!
//! # What We're Measuring
//!
//! 1. **Forward Euler**:
//!    - 1st order accuracy: O(dt)
//!    - 1 vector-field evaluation per step
//!
//! 2. **RK4**:
//!    - 4th order accuracy: O(dt⁴)
//!    - 4 vector-field evaluations per step
//!
//! # Expected Results
//!
//! RK4 should land near 4× the Euler time on the same grid, since the
//! per-step cost is dominated by vector-field evaluations. If the ratio
//! drifts well above 4× look for extra allocations in the RK4 stages.
//!
//! ```bash
//! cargo bench --bench solver_performance
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use epi_rs::models::{Seir, Sir};
use epi_rs::solver::{linspace, ForwardEuler, OdeSolver, Rk4, StepStrategy};

// =================================================================================================
// Helpers
// =================================================================================================

/// Build a ready-to-run SIR solver over the reference outbreak
fn sir_solver(strategy: Box<dyn StepStrategy>) -> OdeSolver {
    let model = Sir::new(0.002, 0.5, 1000.0, 1.0, 0.0);
    let mut solver = OdeSolver::with_strategy(Box::new(model.clone()), strategy);
    solver
        .install_initial_conditions(model.initial_conditions())
        .unwrap();
    solver
}

/// Build a ready-to-run SEIR solver
fn seir_solver(strategy: Box<dyn StepStrategy>) -> OdeSolver {
    let model = Seir::new(0.04, 1.0 / 5.2, 0.1, 999.0, 0.0, 1.0, 0.0);
    let mut solver = OdeSolver::with_strategy(Box::new(model.clone()), strategy);
    solver
        .install_initial_conditions(model.initial_conditions())
        .unwrap();
    solver
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Forward Euler on the SIR reference outbreak at increasing grid densities
///
/// Time should scale linearly with the number of grid points.
fn benchmark_euler_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward Euler");

    for &points in [101usize, 1001, 6001, 20001].iter() {
        let solver = sir_solver(Box::new(ForwardEuler::new()));
        let grid = linspace(0.0, 60.0, points);

        group.throughput(criterion::Throughput::Elements((points - 1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| solver.solve(black_box(&grid)).unwrap());
        });
    }

    group.finish();
}

/// RK4 on the SIR reference outbreak at increasing grid densities
///
/// Same grids as the Euler group so the two can be compared directly.
fn benchmark_rk4_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Runge-Kutta 4");

    for &points in [101usize, 1001, 6001, 20001].iter() {
        let solver = sir_solver(Box::new(Rk4::new()));
        let grid = linspace(0.0, 60.0, points);

        // 4 evaluations per step
        group.throughput(criterion::Throughput::Elements(4 * (points - 1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| solver.solve(black_box(&grid)).unwrap());
        });
    }

    group.finish();
}

/// Head-to-head comparison across models at a fixed, realistic resolution
fn benchmark_strategy_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strategy Comparison");

    let sir_grid = linspace(0.0, 60.0, 6001);
    let seir_grid = linspace(0.0, 180.0, 1801);

    {
        let solver = sir_solver(Box::new(ForwardEuler::new()));
        group.bench_function("SIR / Euler / 6001 points", |b| {
            b.iter(|| solver.solve(black_box(&sir_grid)).unwrap());
        });
    }
    {
        let solver = sir_solver(Box::new(Rk4::new()));
        group.bench_function("SIR / RK4 / 6001 points", |b| {
            b.iter(|| solver.solve(black_box(&sir_grid)).unwrap());
        });
    }
    {
        let solver = seir_solver(Box::new(ForwardEuler::new()));
        group.bench_function("SEIR / Euler / 1801 points", |b| {
            b.iter(|| solver.solve(black_box(&seir_grid)).unwrap());
        });
    }
    {
        let solver = seir_solver(Box::new(Rk4::new()));
        group.bench_function("SEIR / RK4 / 1801 points", |b| {
            b.iter(|| solver.solve(black_box(&seir_grid)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_euler_solver,
    benchmark_rk4_solver,
    benchmark_strategy_comparison,
);
criterion_main!(benches);

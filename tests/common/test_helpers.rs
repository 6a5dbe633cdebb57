//! Helper functions for integration tests

use epi_rs::dynamics::VectorField;
use epi_rs::solver::{OdeSolver, Solution, StepStrategy};
use nalgebra::DVector;

/// Build a ready-to-run solver over a field with the given initial condition
pub fn solver_for(
    field: Box<dyn VectorField>,
    strategy: Box<dyn StepStrategy>,
    u0: DVector<f64>,
) -> OdeSolver {
    let mut solver = OdeSolver::with_strategy(field, strategy);
    solver
        .install_initial_conditions(u0)
        .expect("valid initial condition");
    solver
}

/// Sum of all compartments at grid index `i`
pub fn total_population(solution: &Solution, i: usize) -> f64 {
    solution.state_at(i).sum()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}

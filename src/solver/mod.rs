//! Time-stepping solver core
//!
//! This module owns the simulation state and drives it forward one grid
//! point at a time, delegating the per-step update formula to a pluggable
//! strategy.
//!
//! # Core Concepts
//!
//! The architecture separates concerns into three layers:
//!
//! 1. **Vector field** ([`VectorField`](crate::dynamics::VectorField)) - WHAT
//!    to integrate: the right-hand side `f(u, t)` supplied by a model
//!
//! 2. **Driver** ([`OdeSolver`]) - the bookkeeping: owns the initial
//!    condition, validates the time grid, allocates the trajectory, and walks
//!    the grid in order
//!
//! 3. **Strategy** ([`StepStrategy`]) - HOW to step: the update formula
//!    turning the state at `t_i` into the state at `t_{i+1}`
//!
//! This separation allows:
//! - Same model with different stepping methods
//! - Same method with different models
//! - New methods (Heun, Backward Euler, ...) added as siblings without
//!   touching the driver
//!
//! # Module Organization
//!
//! - **`traits`**: `StepStrategy`, `SolveError`, `Solution`,
//!   `InitialCondition`
//! - **`driver`**: the `OdeSolver` driver
//! - **`methods`**: concrete strategies ([`ForwardEuler`], [`Rk4`])
//!
//! # Quick Start Example
//!
//! ```rust
//! use epi_rs::dynamics::FnField;
//! use epi_rs::solver::{linspace, OdeSolver};
//! use nalgebra::DVector;
//!
//! # fn main() -> Result<(), epi_rs::solver::SolveError> {
//! // Scalar exponential decay: u' = -0.5 u, u(0) = 1
//! let field = FnField::new(1, |u: &DVector<f64>, _t| u * -0.5);
//!
//! let mut solver = OdeSolver::new(Box::new(field));
//! solver.install_initial_conditions(1.0)?;
//!
//! let solution = solver.solve(&linspace(0.0, 10.0, 1001))?;
//! assert_eq!(solution.len(), 1001);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every failure is surfaced synchronously as a [`SolveError`]; a run either
//! completes with a full trajectory or returns an error; partial results
//! are never handed back.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod driver;
mod methods;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use driver::OdeSolver;
pub use methods::{ForwardEuler, Rk4};
pub use traits::{InitialCondition, Solution, SolveError, StepStrategy};

use crate::dynamics::VectorField;
use nalgebra::DVector;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Uniform time grid from `start` to `stop` with `points` samples
///
/// Each point is computed directly from its index rather than by repeated
/// addition, so rounding error does not accumulate along the grid and the
/// last point lands on `stop` to within machine epsilon.
///
/// # Example
///
/// ```rust
/// use epi_rs::solver::linspace;
///
/// let grid = linspace(0.0, 60.0, 6001);
/// assert_eq!(grid.len(), 6001);
/// assert_eq!(grid[0], 0.0);
/// assert!((grid[6000] - 60.0).abs() < 1e-12);
/// ```
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![start; points];
    }

    let dt = (stop - start) / (points as f64 - 1.0);
    (0..points).map(|i| start + (i as f64) * dt).collect()
}

/// Evaluate a vector field and validate the derivative it returns
///
/// Checks that the derivative has the same length as the state and contains
/// only finite values. Stepping strategies route every field evaluation
/// through this helper so that a misbehaving field aborts the run with a
/// [`SolveError::VectorFieldEvaluation`] instead of corrupting the
/// trajectory or panicking inside vector arithmetic.
pub fn checked_rate(
    field: &dyn VectorField,
    state: &DVector<f64>,
    t: f64,
) -> Result<DVector<f64>, SolveError> {
    let rate = field.rate(state, t);

    if rate.len() != state.len() {
        return Err(SolveError::VectorFieldEvaluation {
            time: t,
            reason: format!(
                "derivative has dimension {} but state has dimension {}",
                rate.len(),
                state.len()
            ),
        });
    }

    // NaN can arise from 0/0 or Inf - Inf inside the field; Inf indicates
    // overflow. Either one would silently poison every later step.
    if rate.iter().any(|x| !x.is_finite()) {
        return Err(SolveError::VectorFieldEvaluation {
            time: t,
            reason: "derivative contains NaN or Inf; \
                     this indicates numerical instability in the model, \
                     try a finer time grid"
                .to_string(),
        });
    }

    Ok(rate)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::FnField;

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 24.0, 1001);

        assert_eq!(grid.len(), 1001);
        assert_eq!(grid[0], 0.0);
        assert!((grid[1000] - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_uniform_spacing() {
        let grid = linspace(0.0, 10.0, 101);
        let dt = 0.1;

        for window in grid.windows(2) {
            assert!(((window[1] - window[0]) - dt).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_nonzero_start() {
        let grid = linspace(5.0, 15.0, 3);

        assert_eq!(grid, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(linspace(1.0, 2.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_checked_rate_accepts_well_behaved_field() {
        let field = FnField::new(2, |u: &DVector<f64>, _t| -u);
        let state = DVector::from_vec(vec![1.0, 2.0]);

        let rate = checked_rate(&field, &state, 0.0).unwrap();
        assert_eq!(rate, DVector::from_vec(vec![-1.0, -2.0]));
    }

    #[test]
    fn test_checked_rate_rejects_dimension_mismatch() {
        // Field declares dimension 2 but returns 3 entries
        let field = FnField::new(2, |_u: &DVector<f64>, _t| DVector::zeros(3));
        let state = DVector::from_vec(vec![1.0, 2.0]);

        let err = checked_rate(&field, &state, 1.5).unwrap_err();
        match err {
            SolveError::VectorFieldEvaluation { time, reason } => {
                assert_eq!(time, 1.5);
                assert!(reason.contains("dimension 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_checked_rate_rejects_nan() {
        let field = FnField::new(1, |_u: &DVector<f64>, _t| {
            DVector::from_element(1, f64::NAN)
        });
        let state = DVector::from_vec(vec![1.0]);

        let err = checked_rate(&field, &state, 0.0).unwrap_err();
        assert!(err.to_string().contains("NaN"));
    }
}

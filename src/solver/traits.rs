//! Solver core traits and types
//!
//! # Design Philosophy
//!
//! This module defines the stable surface of the solver core:
//! - `StepStrategy` is the single extension point: one operation, `advance`,
//!   computing the next state from the current one
//! - `SolveError` enumerates every way a solve can fail
//! - `Solution` carries the completed trajectory back to the caller
//! - `InitialCondition` normalizes scalar-or-sequence initial values
//!
//! # Stability Guarantee
//!
//! - `StepStrategy` trait: STABLE, will not change; new methods are added as
//!   sibling implementations, never by touching the trait
//! - `SolveError`: EXTENSIBLE (new variants can be added)

use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use thiserror::Error;

use crate::dynamics::VectorField;

// =================================================================================================
// Error Taxonomy
// =================================================================================================

/// Errors raised by the solver core
///
/// All errors are fatal for the run in progress: there is no internal retry,
/// and a failing run never yields a partial trajectory.
#[derive(Debug, Error)]
pub enum SolveError {
    /// `solve` was invoked before a vector field or initial condition was
    /// installed
    #[error("solver is not initialized: {0}")]
    NotInitialized(&'static str),

    /// Empty initial state, or a re-install that changes the system dimension
    #[error("invalid initial condition: {0}")]
    InvalidInitialCondition(String),

    /// Fewer than two time points, or a grid that is not strictly increasing
    #[error("invalid time grid: {0}")]
    InvalidTimeGrid(String),

    /// The supplied vector field produced an unusable derivative
    ///
    /// Covers a dimension mismatch between derivative and state, and
    /// non-finite (NaN/Inf) values surfacing in the state; both trace back
    /// to the field evaluation at the reported time.
    #[error("vector field evaluation failed at t = {time}: {reason}")]
    VectorFieldEvaluation { time: f64, reason: String },
}

// =================================================================================================
// Initial Condition
// =================================================================================================

/// Initial value of the system: a scalar (dimension 1) or a vector
///
/// Installing it fixes the system dimension for the lifetime of the solver.
///
/// # Example
///
/// ```rust
/// use epi_rs::solver::InitialCondition;
///
/// let scalar: InitialCondition = 1.0.into();
/// assert_eq!(scalar.dimension(), 1);
///
/// let vector: InitialCondition = vec![1000.0, 1.0, 0.0].into();
/// assert_eq!(vector.dimension(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InitialCondition {
    /// Single scalar equation
    Scalar(f64),

    /// System of coupled equations
    Vector(DVector<f64>),
}

impl InitialCondition {
    /// System dimension this initial condition implies
    pub fn dimension(&self) -> usize {
        match self {
            InitialCondition::Scalar(_) => 1,
            InitialCondition::Vector(v) => v.len(),
        }
    }

    /// View as a state vector (a scalar becomes a length-1 vector)
    pub fn to_state(&self) -> DVector<f64> {
        match self {
            InitialCondition::Scalar(value) => DVector::from_element(1, *value),
            InitialCondition::Vector(v) => v.clone(),
        }
    }
}

impl From<f64> for InitialCondition {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for InitialCondition {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(values))
    }
}

impl From<&[f64]> for InitialCondition {
    fn from(values: &[f64]) -> Self {
        Self::Vector(DVector::from_row_slice(values))
    }
}

impl From<DVector<f64>> for InitialCondition {
    fn from(values: DVector<f64>) -> Self {
        Self::Vector(values)
    }
}

// =================================================================================================
// Step Strategy
// =================================================================================================

/// Single-step update rule
///
/// # Contract
///
/// Given the current state, the vector field, and the two bracketing time
/// points, `advance` returns the state at `t1`. Strategies are:
///
/// - **Stateless**: no internal mutable state; the step index and times are
///   passed in explicitly, never read from shared state
/// - **Deterministic**: identical inputs produce identical outputs
/// - **Fallible only through the field**: the only errors a strategy may
///   raise are [`SolveError::VectorFieldEvaluation`] from evaluating `field`
///
/// # Implementing a New Strategy
///
/// ```rust
/// use epi_rs::dynamics::VectorField;
/// use epi_rs::solver::{checked_rate, SolveError, StepStrategy};
/// use nalgebra::DVector;
///
/// /// Explicit midpoint method (second order)
/// struct Midpoint;
///
/// impl StepStrategy for Midpoint {
///     fn advance(
///         &self,
///         state: &DVector<f64>,
///         field: &dyn VectorField,
///         t0: f64,
///         t1: f64,
///     ) -> Result<DVector<f64>, SolveError> {
///         let dt = t1 - t0;
///         let k1 = checked_rate(field, state, t0)?;
///         let half = state + &k1 * (dt / 2.0);
///         let k2 = checked_rate(field, &half, t0 + dt / 2.0)?;
///         Ok(state + k2 * dt)
///     }
///
///     fn name(&self) -> &'static str {
///         "Explicit Midpoint"
///     }
/// }
/// ```
pub trait StepStrategy: Send + Sync {
    /// Compute the state at `t1` from the state at `t0`
    fn advance(
        &self,
        state: &DVector<f64>,
        field: &dyn VectorField,
        t0: f64,
        t1: f64,
    ) -> Result<DVector<f64>, SolveError>;

    /// Human-readable method name (used in result metadata)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Solution
// =================================================================================================

/// Completed integration result
///
/// The sole hand-off to any visualization or reporting layer: the full
/// trajectory (one row per time point, one column per compartment), the time
/// grid it was computed on, and string metadata for diagnostics.
///
/// # Example
///
/// ```rust,ignore
/// let solution = solver.solve(&times)?;
///
/// assert_eq!(solution.len(), times.len());
/// let susceptible = solution.component(0);   // column 0 over time
/// let last = solution.final_state();         // state at the last grid point
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    /// Time grid the trajectory was computed on (length `n`)
    pub times: Vec<f64>,

    /// Dense `n × m` trajectory; row `i` is the state at `times[i]`
    pub trajectory: DMatrix<f64>,

    /// Diagnostic metadata (solver name, grid size, ...)
    pub metadata: HashMap<String, String>,
}

impl Solution {
    /// Build a solution from a time grid and a matching trajectory
    pub fn new(times: Vec<f64>, trajectory: DMatrix<f64>) -> Self {
        debug_assert_eq!(times.len(), trajectory.nrows());
        Self {
            times,
            trajectory,
            metadata: HashMap::new(),
        }
    }

    /// Number of computed states (grid length `n`)
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check for an empty solution (never produced by a successful solve)
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// System dimension `m`
    pub fn dimension(&self) -> usize {
        self.trajectory.ncols()
    }

    /// State vector at grid index `i`
    ///
    /// # Panics
    ///
    /// Panics when `i >= len()`.
    pub fn state_at(&self, i: usize) -> DVector<f64> {
        self.trajectory.row(i).transpose()
    }

    /// State at the last grid point
    pub fn final_state(&self) -> DVector<f64> {
        self.state_at(self.len() - 1)
    }

    /// One component (column `j`) over the whole grid
    ///
    /// This is the natural input for a line plot of a single compartment.
    ///
    /// # Panics
    ///
    /// Panics when `j >= dimension()`.
    pub fn component(&self, j: usize) -> Vec<f64> {
        self.trajectory.column(j).iter().copied().collect()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_condition_scalar() {
        let ic = InitialCondition::from(2.5);

        assert_eq!(ic.dimension(), 1);
        assert_eq!(ic.to_state(), DVector::from_vec(vec![2.5]));
    }

    #[test]
    fn test_initial_condition_vector() {
        let ic = InitialCondition::from(vec![1000.0, 1.0, 0.0]);

        assert_eq!(ic.dimension(), 3);
        assert_eq!(ic.to_state()[0], 1000.0);
        assert_eq!(ic.to_state()[2], 0.0);
    }

    #[test]
    fn test_initial_condition_from_slice() {
        let values = [4.0, 5.0];
        let ic = InitialCondition::from(&values[..]);

        assert_eq!(ic.dimension(), 2);
    }

    #[test]
    fn test_solution_accessors() {
        let trajectory = DMatrix::from_row_slice(3, 2, &[
            1.0, 0.0,
            0.8, 0.2,
            0.5, 0.5,
        ]);
        let solution = Solution::new(vec![0.0, 1.0, 2.0], trajectory);

        assert_eq!(solution.len(), 3);
        assert_eq!(solution.dimension(), 2);
        assert_eq!(solution.state_at(1), DVector::from_vec(vec![0.8, 0.2]));
        assert_eq!(solution.final_state()[1], 0.5);
        assert_eq!(solution.component(0), vec![1.0, 0.8, 0.5]);
    }

    #[test]
    fn test_solution_metadata() {
        let solution = {
            let mut s = Solution::new(vec![0.0, 1.0], DMatrix::zeros(2, 1));
            s.add_metadata("solver", "Forward Euler");
            s
        };

        assert_eq!(
            solution.metadata.get("solver"),
            Some(&"Forward Euler".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let err = SolveError::InvalidTimeGrid("need at least 2 points, got 1".to_string());

        assert_eq!(
            err.to_string(),
            "invalid time grid: need at least 2 points, got 1"
        );
    }
}

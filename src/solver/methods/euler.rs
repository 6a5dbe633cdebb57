//! Forward Euler stepping strategy
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for ordinary differential equations:
//!
//! ```text
//! du/dt = f(u, t)
//! ```
//!
//! The scheme approximates the solution at `t_{i+1}` using:
//!
//! ```text
//! u_{i+1} = u_i + (t_{i+1} - t_i) · f(u_i, t_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate, local truncation error O(dt²),
//!   global error O(dt) over a fixed interval
//! - **Stability**: conditionally stable (requires small time steps)
//! - **Complexity**: 1 field evaluation per step
//!
//! The update is exactly one evaluation and one scaled addition: no implicit
//! averaging, no correction terms. Downstream accuracy claims (error halves
//! when the step halves) depend on the order being exactly one.
//!
//! # When to Use
//!
//! - The compartmental models in this crate on reasonably fine grids
//! - Quick exploratory simulations
//! - As the reference point when checking a higher-order sibling
//!
//! # When NOT to Use
//!
//! - Stiff systems → would need an implicit method
//! - Tight accuracy requirements → use [`Rk4`](crate::solver::Rk4)

use nalgebra::DVector;

use crate::dynamics::VectorField;
use crate::solver::checked_rate;
use crate::solver::traits::{SolveError, StepStrategy};

// =================================================================================================
// Forward Euler
// =================================================================================================

/// Explicit first-order stepping strategy
///
/// # Algorithm
///
/// For the interval `[t0, t1]`:
///
/// 1. Evaluate the slope at the left endpoint: `k = f(u, t0)`
/// 2. Step along it: `u + (t1 - t0) · k`
///
/// # Stability
///
/// For the linear test problem `u' = λu` the stability condition is
/// `|1 + λ·dt| ≤ 1`. Epidemic models with fast transitions (large rate
/// coefficients) need a correspondingly fine grid.
///
/// # Example
///
/// ```rust
/// use epi_rs::solver::{ForwardEuler, StepStrategy};
///
/// let strategy = ForwardEuler::new();
/// assert_eq!(strategy.name(), "Forward Euler");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl ForwardEuler {
    /// Create a new Forward Euler strategy
    pub fn new() -> Self {
        Self
    }
}

impl StepStrategy for ForwardEuler {
    fn advance(
        &self,
        state: &DVector<f64>,
        field: &dyn VectorField,
        t0: f64,
        t1: f64,
    ) -> Result<DVector<f64>, SolveError> {
        let dt = t1 - t0;

        // u_{i+1} = u_i + dt · f(u_i, t_i)
        let slope = checked_rate(field, state, t0)?;

        Ok(state + slope * dt)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Classical fourth-order Runge-Kutta stepping strategy
//!
//! # Mathematical Background
//!
//! RK4 samples the vector field four times per step and combines the slopes
//! with Simpson's-rule weights:
//!
//! ```text
//! k₁ = f(uᵢ, tᵢ)
//! k₂ = f(uᵢ + dt/2·k₁, tᵢ + dt/2)
//! k₃ = f(uᵢ + dt/2·k₂, tᵢ + dt/2)
//! k₄ = f(uᵢ + dt·k₃, tᵢ + dt)
//!
//! uᵢ₊₁ = uᵢ + dt/6·(k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: fourth-order, global error O(dt⁴)
//! - **Cost**: 4 field evaluations per step (4× Euler)
//!
//! RK4 exists here mostly to prove the strategy extension point: the driver
//! is oblivious to which method it holds.

use nalgebra::DVector;

use crate::dynamics::VectorField;
use crate::solver::checked_rate;
use crate::solver::traits::{SolveError, StepStrategy};

/// Classical fourth-order Runge-Kutta strategy
///
/// # Example
///
/// ```rust
/// use epi_rs::solver::{Rk4, StepStrategy};
///
/// let strategy = Rk4::new();
/// assert_eq!(strategy.name(), "Runge-Kutta 4");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl Rk4 {
    /// Create a new RK4 strategy
    pub fn new() -> Self {
        Self
    }
}

impl StepStrategy for Rk4 {
    fn advance(
        &self,
        state: &DVector<f64>,
        field: &dyn VectorField,
        t0: f64,
        t1: f64,
    ) -> Result<DVector<f64>, SolveError> {
        let dt = t1 - t0;
        let mid = t0 + dt / 2.0;

        let k1 = checked_rate(field, state, t0)?;
        let k2 = checked_rate(field, &(state + &k1 * (dt / 2.0)), mid)?;
        let k3 = checked_rate(field, &(state + &k2 * (dt / 2.0)), mid)?;
        let k4 = checked_rate(field, &(state + &k3 * dt), t1)?;

        // Simpson's-rule weights: endpoints 1/6, midpoints 2/6
        let weighted = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        Ok(state + weighted * (dt / 6.0))
    }

    fn name(&self) -> &'static str {
        "Runge-Kutta 4"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

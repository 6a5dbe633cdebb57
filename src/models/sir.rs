//! SIR disease model
//!
//! Three compartments with the coupled equations:
//!
//! ```text
//! S' = -β·S·I
//! I' =  β·S·I - μ·I
//! R' =  μ·I
//! ```
//!
//! The population is closed: every individual leaving one compartment enters
//! another, so the component derivatives sum to zero and `S + I + R` stays
//! constant along any trajectory.
//!
//! # Example
//!
//! ```rust
//! use epi_rs::models::Sir;
//! use epi_rs::solver::{linspace, OdeSolver};
//!
//! # fn main() -> Result<(), epi_rs::solver::SolveError> {
//! let model = Sir::new(0.002, 0.5, 1000.0, 1.0, 0.0);
//!
//! let mut solver = OdeSolver::new(Box::new(model.clone()));
//! solver.install_initial_conditions(model.initial_conditions())?;
//! let solution = solver.solve(&linspace(0.0, 60.0, 6001))?;
//!
//! // The outbreak burns through the susceptibles
//! assert!(solution.final_state()[0] < 100.0);
//! # Ok(())
//! # }
//! ```

use nalgebra::DVector;

use crate::dynamics::{Coefficient, VectorField};

/// SIR model: Susceptible, Infected, Recovered
///
/// Compartment order in state vectors and trajectories: `[S, I, R]`.
#[derive(Clone, Debug)]
pub struct Sir {
    /// Infection rate β (per contact per time)
    beta: Coefficient,
    /// Recovery rate μ (per time)
    mu: Coefficient,
    /// Initial compartment sizes `[S0, I0, R0]`
    initial: [f64; 3],
}

impl Sir {
    /// Create an SIR model
    ///
    /// `beta` and `mu` accept either plain numbers or time-varying
    /// [`Coefficient`]s; `s0`, `i0`, `r0` are the initial compartment sizes.
    pub fn new(
        beta: impl Into<Coefficient>,
        mu: impl Into<Coefficient>,
        s0: f64,
        i0: f64,
        r0: f64,
    ) -> Self {
        Self {
            beta: beta.into(),
            mu: mu.into(),
            initial: [s0, i0, r0],
        }
    }

    /// Initial-condition vector `[S0, I0, R0]`
    pub fn initial_conditions(&self) -> DVector<f64> {
        DVector::from_row_slice(&self.initial)
    }

    /// Total population `S0 + I0 + R0`, conserved along the trajectory
    pub fn population(&self) -> f64 {
        self.initial.iter().sum()
    }
}

impl VectorField for Sir {
    fn rate(&self, state: &DVector<f64>, t: f64) -> DVector<f64> {
        let (s, i) = (state[0], state[1]);

        let infections = self.beta.at(t) * s * i;
        let recoveries = self.mu.at(t) * i;

        DVector::from_vec(vec![
            -infections,
            infections - recoveries,
            recoveries,
        ])
    }

    fn dimension(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "SIR"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

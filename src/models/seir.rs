//! SEIR disease model
//!
//! Extends SIR with an Exposed compartment for diseases with an incubation
//! period:
//!
//! ```text
//! S' = -β·S·I
//! E' =  β·S·I - σ·E
//! I' =  σ·E - γ·I
//! R' =  γ·I
//! ```
//!
//! σ is the incubation rate (1 / incubation period) and γ the recovery rate
//! (1 / infectious period). Like SIR this is a closed population: the
//! derivatives sum to zero.

use nalgebra::DVector;

use crate::dynamics::{Coefficient, VectorField};

/// SEIR model: Susceptible, Exposed, Infectious, Recovered
///
/// Compartment order in state vectors and trajectories: `[S, E, I, R]`.
#[derive(Clone, Debug)]
pub struct Seir {
    /// Infection rate β
    beta: Coefficient,
    /// Incubation rate σ (1 / incubation period)
    sigma: Coefficient,
    /// Recovery rate γ (1 / infectious period)
    gamma: Coefficient,
    /// Initial compartment sizes `[S0, E0, I0, R0]`
    initial: [f64; 4],
}

impl Seir {
    /// Create an SEIR model
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        beta: impl Into<Coefficient>,
        sigma: impl Into<Coefficient>,
        gamma: impl Into<Coefficient>,
        s0: f64,
        e0: f64,
        i0: f64,
        r0: f64,
    ) -> Self {
        Self {
            beta: beta.into(),
            sigma: sigma.into(),
            gamma: gamma.into(),
            initial: [s0, e0, i0, r0],
        }
    }

    /// Initial-condition vector `[S0, E0, I0, R0]`
    pub fn initial_conditions(&self) -> DVector<f64> {
        DVector::from_row_slice(&self.initial)
    }

    /// Total population, conserved along the trajectory
    pub fn population(&self) -> f64 {
        self.initial.iter().sum()
    }
}

impl VectorField for Seir {
    fn rate(&self, state: &DVector<f64>, t: f64) -> DVector<f64> {
        let (s, e, i) = (state[0], state[1], state[2]);

        let infections = self.beta.at(t) * s * i;
        let onsets = self.sigma.at(t) * e;
        let recoveries = self.gamma.at(t) * i;

        DVector::from_vec(vec![
            -infections,
            infections - onsets,
            onsets - recoveries,
            recoveries,
        ])
    }

    fn dimension(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "SEIR"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn literature_model() -> Seir {
        // β = 0.04, σ = 1/5.2 (incubation), γ = 1/10 (infectious period)
        Seir::new(0.04, 1.0 / 5.2, 0.1, 999.0, 0.0, 1.0, 0.0)
    }

    #[test]
    fn test_derivatives_sum_to_zero() {
        let model = literature_model();
        let rate = model.rate(&DVector::from_vec(vec![700.0, 120.0, 150.0, 31.0]), 12.0);

        assert!(rate.sum().abs() < 1e-9);
    }

    #[test]
    fn test_exposed_feeds_infectious() {
        // Only exposed present: E drains into I at rate σ·E
        let model = Seir::new(0.04, 0.25, 0.1, 0.0, 100.0, 0.0, 0.0);
        let rate = model.rate(&DVector::from_vec(vec![0.0, 100.0, 0.0, 0.0]), 0.0);

        assert_eq!(rate[0], 0.0);
        assert_eq!(rate[1], -25.0);
        assert_eq!(rate[2], 25.0);
        assert_eq!(rate[3], 0.0);
    }

    #[test]
    fn test_initial_conditions_match_dimension() {
        let model = literature_model();

        assert_eq!(model.initial_conditions().len(), model.dimension());
        assert_eq!(model.population(), 1000.0);
        assert_eq!(model.name(), "SEIR");
    }
}

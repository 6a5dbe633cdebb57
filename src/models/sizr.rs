//! SIZR zombie outbreak model
//!
//! A fictional epidemic with four compartments and, unlike SIR/SEIR, an open
//! population: births flow in and kills flow out:
//!
//! ```text
//! S' = σ - β·S·Z - δ_S·S
//! I' = β·S·Z - ρ·I - δ_I·I
//! Z' = ρ·I - α·S·Z
//! R' = δ_S·S + δ_I·I + α·S·Z
//! ```
//!
//! - σ: susceptible birth rate (source term)
//! - β: probability a zombie turns a human
//! - ρ: rate at which the infected become zombies
//! - δ_S, δ_I: background death rates of susceptible and infected humans
//! - α: rate at which humans destroy zombies
//!
//! Because of the σ source there is no conservation law; only the
//! birth-free sub-balance cancels.

use nalgebra::DVector;

use crate::dynamics::{Coefficient, VectorField};

/// SIZR model: Susceptible, Infected, Zombie, Removed
///
/// Compartment order in state vectors and trajectories: `[S, I, Z, R]`.
#[derive(Clone, Debug)]
pub struct Sizr {
    /// Birth rate σ of new susceptibles
    sigma: Coefficient,
    /// Zombification contact rate β
    beta: Coefficient,
    /// Infected-to-zombie conversion rate ρ
    rho: Coefficient,
    /// Background death rate δ_S of susceptibles
    delta_s: Coefficient,
    /// Death rate δ_I of the infected
    delta_i: Coefficient,
    /// Zombie destruction rate α
    alpha: Coefficient,
    /// Initial compartment sizes `[S0, I0, Z0, R0]`
    initial: [f64; 4],
}

impl Sizr {
    /// Create a SIZR model
    ///
    /// Every rate accepts a plain number or a time-varying
    /// [`Coefficient`]; a decaying β models humans learning to avoid
    /// zombies.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sigma: impl Into<Coefficient>,
        beta: impl Into<Coefficient>,
        rho: impl Into<Coefficient>,
        delta_s: impl Into<Coefficient>,
        delta_i: impl Into<Coefficient>,
        alpha: impl Into<Coefficient>,
        s0: f64,
        i0: f64,
        z0: f64,
        r0: f64,
    ) -> Self {
        Self {
            sigma: sigma.into(),
            beta: beta.into(),
            rho: rho.into(),
            delta_s: delta_s.into(),
            delta_i: delta_i.into(),
            alpha: alpha.into(),
            initial: [s0, i0, z0, r0],
        }
    }

    /// Initial-condition vector `[S0, I0, Z0, R0]`
    pub fn initial_conditions(&self) -> DVector<f64> {
        DVector::from_row_slice(&self.initial)
    }
}

impl VectorField for Sizr {
    fn rate(&self, state: &DVector<f64>, t: f64) -> DVector<f64> {
        let (s, i, z) = (state[0], state[1], state[2]);

        let births = self.sigma.at(t);
        let zombifications = self.beta.at(t) * s * z;
        let conversions = self.rho.at(t) * i;
        let susceptible_deaths = self.delta_s.at(t) * s;
        let infected_deaths = self.delta_i.at(t) * i;
        let zombie_kills = self.alpha.at(t) * s * z;

        DVector::from_vec(vec![
            births - zombifications - susceptible_deaths,
            zombifications - conversions - infected_deaths,
            conversions - zombie_kills,
            susceptible_deaths + infected_deaths + zombie_kills,
        ])
    }

    fn dimension(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "SIZR"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

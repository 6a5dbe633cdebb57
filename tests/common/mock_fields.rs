//! Mock vector fields for testing
//!
//! These systems have known analytical solutions, making them ideal for
//! validating numerical solver accuracy.

use epi_rs::dynamics::VectorField;
use nalgebra::DVector;

// =================================================================================================
// Exponential Decay: u' = -k·u
// =================================================================================================

/// Exponential decay: `u' = -k·u`
///
/// Analytical solution: `u(t) = u₀·e^{-kt}`
pub struct ExponentialDecay {
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }

    /// Exact solution at time `t`
    pub fn analytical_solution(&self, t: f64, u0: f64) -> f64 {
        u0 * (-self.decay_rate * t).exp()
    }
}

impl VectorField for ExponentialDecay {
    fn rate(&self, state: &DVector<f64>, _t: f64) -> DVector<f64> {
        state * -self.decay_rate
    }

    fn dimension(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: u' = c
// =================================================================================================

/// Constant growth: `u' = c` (componentwise)
///
/// Analytical solution: `u(t) = u₀ + c·t`; Forward Euler is exact here.
pub struct ConstantGrowth {
    pub dimension: usize,
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(dimension: usize, growth_rate: f64) -> Self {
        Self {
            dimension,
            growth_rate,
        }
    }

    /// Exact solution at time `t`
    pub fn analytical_solution(&self, t: f64, u0: f64) -> f64 {
        u0 + self.growth_rate * t
    }
}

impl VectorField for ConstantGrowth {
    fn rate(&self, _state: &DVector<f64>, _t: f64) -> DVector<f64> {
        DVector::from_element(self.dimension, self.growth_rate)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Tests for Mock Fields
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay_analytical() {
        let field = ExponentialDecay::new(0.5);

        assert!((field.analytical_solution(0.0, 1.0) - 1.0).abs() < 1e-10);

        // u(1) = e^{-0.5} ≈ 0.6065
        let u1 = field.analytical_solution(1.0, 1.0);
        assert!((u1 - 0.6065306597).abs() < 1e-6);
    }

    #[test]
    fn test_constant_growth_analytical() {
        let field = ConstantGrowth::new(3, 2.0);

        assert!((field.analytical_solution(0.0, 0.0) - 0.0).abs() < 1e-10);
        assert!((field.analytical_solution(5.0, 0.0) - 10.0).abs() < 1e-10);
    }
}

//! Vector-field trait and closure adapter
//!
//! This module defines the core API every system of equations must present
//! to the solver:
//! - `VectorField`: trait for all right-hand sides
//! - `FnField`: adapter turning a plain closure into a `VectorField`

use nalgebra::DVector;

// =================================================================================================
// Vector Field Trait
// =================================================================================================

/// Trait for ODE right-hand sides
///
/// # Responsibility
/// Evaluates `du/dt = f(u, t)` at a given state and time.
/// Does NOT integrate it (that's the solver's job).
///
/// The field provides the "dynamics" (equations), the solver provides the
/// "numerics" (stepping method).
///
/// # Contract
///
/// - `rate` must be a pure function of `(state, time)`: no internal mutable
///   state visible to the solver. A field may close over its own
///   time-varying coefficients.
/// - The returned vector must have length [`dimension()`](Self::dimension);
///   the solver rejects a mismatch at the failing step.
///
/// # Mandatory Point
/// All compartmental models MUST implement this trait.
pub trait VectorField: Send + Sync {
    /// Instantaneous rate of change `du/dt` at `(state, t)`
    ///
    /// # Arguments
    /// * `state` - Current state vector (one entry per compartment)
    /// * `t` - Current time
    fn rate(&self, state: &DVector<f64>, t: f64) -> DVector<f64>;

    /// Number of coupled equations (the system dimension)
    ///
    /// Used by the solver to size the trajectory matrix and to check the
    /// vectors returned by [`rate`](Self::rate).
    fn dimension(&self) -> usize;

    /// Name of the field (used for display and result metadata)
    fn name(&self) -> &str {
        "vector field"
    }
}

// =================================================================================================
// Closure Adapter
// =================================================================================================

/// Vector field backed by a plain closure
///
/// Pairs a closure `f(u, t) -> du/dt` with the dimension it operates on.
/// Handy for tests, ad-hoc systems, and quick experiments where a full model
/// struct would be noise.
///
/// # Example
///
/// ```rust
/// use epi_rs::dynamics::{FnField, VectorField};
/// use nalgebra::DVector;
///
/// // Harmonic oscillator: x' = v, v' = -x
/// let field = FnField::new(2, |u: &DVector<f64>, _t| {
///     DVector::from_vec(vec![u[1], -u[0]])
/// });
///
/// assert_eq!(field.dimension(), 2);
/// ```
pub struct FnField<F> {
    dimension: usize,
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(&DVector<f64>, f64) -> DVector<f64> + Send + Sync,
{
    /// Wrap a closure as a vector field of the given dimension
    pub fn new(dimension: usize, f: F) -> Self {
        Self { dimension, f }
    }
}

impl<F> VectorField for FnField<F>
where
    F: Fn(&DVector<f64>, f64) -> DVector<f64> + Send + Sync,
{
    fn rate(&self, state: &DVector<f64>, t: f64) -> DVector<f64> {
        (self.f)(state, t)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "closure field"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Time-dependent model coefficients
//!
//! Epidemic parameters are often constants (a fixed recovery rate) but
//! sometimes functions of time (an infection rate that decays as a
//! population adapts). Model constructors accept both and normalize them
//! into a single representation ONCE, so the per-step evaluation cost in the
//! integration loop is a fixed number of calls regardless of what the caller
//! passed in.
//!
//! # Example
//!
//! ```rust
//! use epi_rs::dynamics::Coefficient;
//!
//! // Constant recovery rate
//! let mu = Coefficient::from(0.5);
//! assert_eq!(mu.at(0.0), 0.5);
//! assert_eq!(mu.at(100.0), 0.5);
//!
//! // Infection rate that decays as humans adapt
//! let beta = Coefficient::of_time(|t| 0.012 * (-0.05 * t).exp());
//! assert!((beta.at(0.0) - 0.012).abs() < 1e-12);
//! assert!(beta.at(20.0) < 0.012);
//! ```

use std::fmt;
use std::sync::Arc;

/// A physical rate that is either constant or a function of time
///
/// # Types
///
/// - **Constant**: a fixed number, wrapped once at construction
/// - **TimeVarying**: a user-supplied function of time, used as-is
///
/// Shared ownership (`Arc`) keeps coefficients cheap to clone, so models
/// holding them can derive `Clone` and be reused across solver instances.
#[derive(Clone)]
pub enum Coefficient {
    /// Fixed rate, independent of time
    Constant(f64),

    /// Rate evaluated at the current integration time
    TimeVarying(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Coefficient {
    /// Wrap a function of time as a coefficient
    ///
    /// # Example
    ///
    /// ```rust
    /// use epi_rs::dynamics::Coefficient;
    /// let seasonal = Coefficient::of_time(|t| 0.3 * (1.0 + (t / 365.0).sin()));
    /// ```
    pub fn of_time<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::TimeVarying(Arc::new(f))
    }

    /// Evaluate the coefficient at time `t`
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        match self {
            Coefficient::Constant(value) => *value,
            Coefficient::TimeVarying(f) => f(t),
        }
    }

    /// Check the coefficient is a plain constant
    pub fn is_constant(&self) -> bool {
        matches!(self, Coefficient::Constant(_))
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl fmt::Debug for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Constant(value) => write!(f, "Constant({})", value),
            Coefficient::TimeVarying(_) => write!(f, "TimeVarying(..)"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

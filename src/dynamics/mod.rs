//! Vector-field contract layer
//!
//! This module defines the contract between the solver core and whatever
//! supplies the equations. A vector field maps `(state, time)` to the
//! instantaneous rate of change of each state component:
//!
//! ```text
//! du/dt = f(u, t)
//! ```
//!
//! # Core Concepts
//!
//! - **Vector field**: the right-hand side of the ODE system, a pure function
//!   of the current state and time
//! - **Coefficient**: a physical rate (infection rate, recovery rate, ...)
//!   that may be a constant or a function of time, normalized once at model
//!   construction
//!
//! # Architecture
//!
//! Vector fields are **separate from numerical solvers**:
//! - The field provides the **equations** (dynamics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! This separation allows:
//! - Same field with different stepping strategies (Euler, RK4, ...)
//! - Same strategy with different fields (SIR, SEIR, SIZR, ad-hoc closures)
//!
//! # Example
//!
//! ```rust
//! use epi_rs::dynamics::{FnField, VectorField};
//! use nalgebra::DVector;
//!
//! // Scalar exponential decay: u' = -0.5 u
//! let field = FnField::new(1, |u: &DVector<f64>, _t| u * -0.5);
//!
//! let rate = field.rate(&DVector::from_vec(vec![2.0]), 0.0);
//! assert_eq!(rate[0], -1.0);
//! ```

// module declaration
pub mod coefficient;
pub mod traits;

// re-export commonly used types for convenience
pub use coefficient::Coefficient;
pub use traits::{FnField, VectorField};

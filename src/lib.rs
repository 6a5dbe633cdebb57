//! epi-rs: Compartmental Epidemic Simulation Framework
//!
//! A small framework for simulating compartmental epidemic models (SIR,
//! SEIR, and the SIZR "zombie outbreak" variant) by integrating systems of
//! first-order ordinary differential equations forward in time.
//!
//! # Architecture
//!
//! epi-rs is built on two core principles:
//!
//! 1. **Separation of Dynamics and Numerics**
//!    - Models define equations (what to integrate)
//!    - The solver core provides stepping methods (how to integrate)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based stepping strategies: Forward Euler ships with the crate,
//!      further single-step schemes plug in as siblings
//!    - Typed errors for every way a solve can fail
//!
//! # Quick Start
//!
//! ```rust
//! use epi_rs::models::Sir;
//! use epi_rs::solver::{linspace, OdeSolver};
//!
//! # fn main() -> Result<(), epi_rs::solver::SolveError> {
//! // 1. Build a model: infection rate, recovery rate, S0, I0, R0
//! let model = Sir::new(0.002, 0.5, 1000.0, 1.0, 0.0);
//!
//! // 2. Build a solver over it and install the initial conditions
//! let mut solver = OdeSolver::new(Box::new(model.clone()));
//! solver.install_initial_conditions(model.initial_conditions())?;
//!
//! // 3. Integrate over a uniform grid: 60 days, 6001 sample points
//! let times = linspace(0.0, 60.0, 6001);
//! let solution = solver.solve(&times)?;
//!
//! // 4. Access results
//! println!("computed {} states of dimension {}", solution.len(), solution.dimension());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`dynamics`]: Vector-field contract consumed by the solver
//! - [`models`]: Compartmental models (SIR, SEIR, SIZR)
//! - [`solver`]: Time-stepping driver and stepping strategies
//! - [`output`]: Result visualization and export

// Core modules
pub mod dynamics;
pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use epi_rs::prelude::*;
    //! ```
    pub use crate::dynamics::{Coefficient,
                              FnField,
                              VectorField};
    pub use crate::models::{Seir, Sir, Sizr};
    pub use crate::solver::{linspace,
                            ForwardEuler,
                            OdeSolver,
                            Rk4,
                            Solution,
                            SolveError,
                            StepStrategy};
}

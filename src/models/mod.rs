//! Compartmental epidemic models
//!
//! All models implement the [`VectorField`](crate::dynamics::VectorField)
//! trait. The solver calls `rate` at each time step; models are responsible
//! for the epidemiology (who infects whom, at what rate), the solver for the
//! time integration.
//!
//! # Available Models
//!
//! ## [`Sir`]: Susceptible / Infected / Recovered
//!
//! The classic closed-population epidemic: susceptibles become infected,
//! infected recover. Total population is conserved.
//!
//! ## [`Seir`]: adds an Exposed compartment
//!
//! Individuals incubate (Exposed) before becoming infectious. Also a closed
//! population.
//!
//! ## [`Sizr`]: zombie outbreak
//!
//! Four compartments (Susceptible, Infected, Zombie, Removed) with an
//! explicit birth source and kill sinks. Total population is NOT conserved.
//!
//! # Coefficients
//!
//! Every rate parameter accepts either a plain number or a
//! [`Coefficient`](crate::dynamics::Coefficient) built from a function of
//! time. The constant-or-callable choice is resolved once at construction,
//! so the integration loop always pays the same fixed evaluation cost.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod seir;
pub mod sir;
pub mod sizr;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use seir::Seir;
pub use sir::Sir;
pub use sizr::Sizr;

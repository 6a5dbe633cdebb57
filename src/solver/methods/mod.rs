//! Single-step integration methods
//!
//! This module contains concrete implementations of the
//! [`StepStrategy`](crate::solver::StepStrategy) trait.
//!
//! # Architecture
//!
//! The separation between the abstract strategy interface (`solver::traits`)
//! and concrete implementations (`solver::methods`) follows the Open-Closed
//! Principle:
//! - **Open** for extension: add new methods without modifying existing code
//! - **Closed** for modification: the `StepStrategy` trait is stable
//!
//! # Available Methods
//!
//! - **[`ForwardEuler`]**: explicit first-order method
//!   - Order: O(dt) global error
//!   - Cost: 1 field evaluation per step
//!   - Use: the workhorse for the compartmental models in this crate
//!
//! - **[`Rk4`]**: classical fourth-order Runge-Kutta
//!   - Order: O(dt⁴) global error
//!   - Cost: 4 field evaluations per step
//!   - Use: when accuracy matters more than per-step cost
//!
//! Candidates for future siblings: Heun's method, Backward Euler. Both fit
//! the same `advance(state, field, t0, t1)` contract without driver changes.

pub mod euler;
mod rk4;

// Re-exports for convenience
pub use euler::ForwardEuler;
pub use rk4::Rk4;

//! Common utilities for integration tests

pub mod mock_fields;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_fields::{ConstantGrowth, ExponentialDecay};
#[allow(unused_imports)]
pub use test_helpers::{relative_error, solver_for, total_population};

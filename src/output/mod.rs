//! Output module for simulation results
//!
//! This module provides tools to hand a completed [`Solution`] to humans and
//! to other programs:
//! - **Visualization**: PNG plots of every compartment over time (plotters)
//! - **Export**: CSV data for pandas, Excel, gnuplot, ...
//!
//! Both consume only the public `Solution` interface: the `(trajectory,
//! times)` pair is the sole hand-off from the solver core.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use epi_rs::output::{export_trajectory_csv, plot_trajectory, PlotConfig};
//!
//! let solution = solver.solve(&times)?;
//! let labels = ["Susceptible", "Infected", "Recovered"];
//!
//! plot_trajectory(&solution, &labels, "sir.png", None)?;
//! export_trajectory_csv(&solution, &labels, "sir.csv", None)?;
//! ```
//!
//! [`Solution`]: crate::solver::Solution

pub mod csv;
pub mod plot;

// Re-export commonly used items for convenience
pub use csv::{export_trajectory_csv, CsvConfig};
pub use plot::{plot_trajectory, PlotConfig};

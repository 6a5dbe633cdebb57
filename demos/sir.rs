//! Demo: SIR epidemic
//!
//! Simulates the reference SIR outbreak (β = 0.002, μ = 0.5, 1000
//! susceptibles, one index case) over 60 days and writes a PNG plot plus a
//! CSV of the trajectory to the system temp directory.
//!
//! ```bash
//! cargo run --example sir
//! ```

use epi_rs::models::Sir;
use epi_rs::output::{export_trajectory_csv, plot_trajectory, PlotConfig};
use epi_rs::solver::{linspace, OdeSolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  SIR Epidemic - Forward Euler");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Model parameters ======

    let beta = 0.002; // infection rate
    let mu = 0.5; // recovery rate
    let (s0, i0, r0) = (1000.0, 1.0, 0.0);

    println!("Parameters:");
    println!("  β (infection) : {}", beta);
    println!("  μ (recovery)  : {}", mu);
    println!("  S0, I0, R0    : {}, {}, {}\n", s0, i0, r0);

    let model = Sir::new(beta, mu, s0, i0, r0);

    // ====== Solve ======

    let mut solver = OdeSolver::new(Box::new(model.clone()));
    solver.install_initial_conditions(model.initial_conditions())?;

    let times = linspace(0.0, 60.0, 6001);
    let solution = solver.solve(&times)?;

    println!("Simulation completed!");
    println!("  Grid points : {}", solution.len());
    println!("  Final state : {:?}\n", solution.final_state().as_slice());

    // ====== Output ======

    let labels = ["Susceptible", "Infected", "Recovered"];
    let tmp = std::env::temp_dir();

    let plot_path = tmp.join("sir.png");
    let mut config = PlotConfig::default();
    config.title = "SIR Epidemic Model".to_string();
    plot_trajectory(&solution, &labels, plot_path.to_str().unwrap(), Some(&config))?;
    println!("Plot written to {}", plot_path.display());

    let csv_path = tmp.join("sir.csv");
    export_trajectory_csv(&solution, &labels, csv_path.to_str().unwrap(), None)?;
    println!("Data written to {}", csv_path.display());

    Ok(())
}

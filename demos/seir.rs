//! Demo: SEIR epidemic
//!
//! Simulates an SEIR outbreak with literature parameters over 180 days:
//! incubation delays the infectious wave behind the exposed wave.
//!
//! ```bash
//! cargo run --example seir
//! ```

use epi_rs::models::Seir;
use epi_rs::output::{export_trajectory_csv, plot_trajectory, PlotConfig};
use epi_rs::solver::{linspace, OdeSolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  SEIR Epidemic - Forward Euler");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Model parameters ======

    let beta = 0.04; // infection rate
    let sigma = 1.0 / 5.2; // incubation rate (1 / incubation period)
    let gamma = 1.0 / 10.0; // recovery rate (1 / infectious period)

    let population = 1000.0;
    let (s0, e0, i0, r0) = (population - 1.0, 0.0, 1.0, 0.0);

    println!("Parameters:");
    println!("  β (infection)  : {}", beta);
    println!("  σ (incubation) : {:.4}", sigma);
    println!("  γ (recovery)   : {}", gamma);
    println!("  N (population) : {}\n", population);

    let model = Seir::new(beta, sigma, gamma, s0, e0, i0, r0);

    // ====== Solve ======

    let mut solver = OdeSolver::new(Box::new(model.clone()));
    solver.install_initial_conditions(model.initial_conditions())?;

    let times = linspace(0.0, 180.0, 1801);
    let solution = solver.solve(&times)?;

    println!("Simulation completed!");
    println!("  Grid points : {}", solution.len());
    println!("  Final state : {:?}\n", solution.final_state().as_slice());

    // ====== Output ======

    let labels = ["Susceptible", "Exposed", "Infectious", "Recovered"];
    let tmp = std::env::temp_dir();

    let plot_path = tmp.join("seir.png");
    let mut config = PlotConfig::default();
    config.title = "SEIR Epidemic Model Simulation".to_string();
    plot_trajectory(&solution, &labels, plot_path.to_str().unwrap(), Some(&config))?;
    println!("Plot written to {}", plot_path.display());

    let csv_path = tmp.join("seir.csv");
    export_trajectory_csv(&solution, &labels, csv_path.to_str().unwrap(), None)?;
    println!("Data written to {}", csv_path.display());

    Ok(())
}

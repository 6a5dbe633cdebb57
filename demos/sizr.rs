//! Demo: SIZR zombie outbreak
//!
//! Simulates the reference outbreak with a time-varying infection rate
//! (humans learn to avoid zombies, so β decays exponentially) over 24 hours.
//!
//! ```bash
//! cargo run --example sizr
//! ```

use epi_rs::dynamics::Coefficient;
use epi_rs::models::Sizr;
use epi_rs::output::{export_trajectory_csv, plot_trajectory, PlotConfig};
use epi_rs::solver::{linspace, OdeSolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  SIZR Zombie Outbreak - Forward Euler");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Model parameters ======

    let sigma = 2.0; // birth rate (new susceptibles per hour)
    let rho = 1.0; // zombification rate of the infected
    let delta_i = 0.014; // natural death rate of the infected
    let alpha = 0.0016; // zombie destruction rate

    // Humans adapt: the infection rate decays as they learn to hide
    let beta = Coefficient::of_time(|t| 0.012 * (-0.05 * t).exp());

    let (s0, i0, z0, r0) = (60.0, 0.0, 1.0, 0.0);

    println!("Parameters:");
    println!("  σ (births)        : {}", sigma);
    println!("  β (infection)     : 0.012·exp(-0.05t)");
    println!("  ρ (zombification) : {}", rho);
    println!("  δ_I (death)       : {}", delta_i);
    println!("  α (destruction)   : {}", alpha);
    println!("  S0, I0, Z0, R0    : {}, {}, {}, {}\n", s0, i0, z0, r0);

    let model = Sizr::new(sigma, beta, rho, 0.0, delta_i, alpha, s0, i0, z0, r0);

    // ====== Solve ======

    let mut solver = OdeSolver::new(Box::new(model.clone()));
    solver.install_initial_conditions(model.initial_conditions())?;

    let times = linspace(0.0, 24.0, 1001);
    let solution = solver.solve(&times)?;

    println!("Simulation completed!");
    println!("  Grid points : {}", solution.len());
    println!("  Final state : {:?}\n", solution.final_state().as_slice());

    // ====== Output ======

    let labels = ["Susceptible Humans", "Infected", "Zombies", "Removed"];
    let tmp = std::env::temp_dir();

    let plot_path = tmp.join("sizr.png");
    let mut config = PlotConfig::default();
    config.title = "SIZR Zombie Outbreak".to_string();
    config.xlabel = "Time (hours)".to_string();
    plot_trajectory(&solution, &labels, plot_path.to_str().unwrap(), Some(&config))?;
    println!("Plot written to {}", plot_path.display());

    let csv_path = tmp.join("sizr.csv");
    export_trajectory_csv(&solution, &labels, csv_path.to_str().unwrap(), None)?;
    println!("Data written to {}", csv_path.display());

    Ok(())
}

//! Convergence tests for stepping strategies
//!
//! These tests verify that the strategies exhibit the expected convergence
//! rates when refining the time grid.

use epi_rs::solver::{linspace, ForwardEuler, Rk4};
use nalgebra::DVector;

mod common;
use common::mock_fields::ExponentialDecay;
use common::solver_for;

#[test]
fn test_euler_first_order_convergence() {
    // Euler should have first-order convergence: error ~ O(dt)
    // When dt → dt/2, error should → error/2

    let decay_rate: f64 = 0.3;
    let total_time = 10.0;
    let exact = (-decay_rate * total_time).exp();

    let steps_list = [100usize, 200, 400, 800];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let solver = solver_for(
            Box::new(ExponentialDecay::new(decay_rate)),
            Box::new(ForwardEuler::new()),
            DVector::from_vec(vec![1.0]),
        );

        let solution = solver
            .solve(&linspace(0.0, total_time, steps + 1))
            .unwrap();

        errors.push((solution.final_state()[0] - exact).abs());
    }

    // Check convergence ratios
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 2 for first-order
        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt⁴)
    // When dt → dt/2, error should → error/16

    let decay_rate: f64 = 0.3;
    let total_time = 5.0;
    let exact = (-decay_rate * total_time).exp();

    let steps_list = [10usize, 20, 40, 80];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let solver = solver_for(
            Box::new(ExponentialDecay::new(decay_rate)),
            Box::new(Rk4::new()),
            DVector::from_vec(vec![1.0]),
        );

        let solution = solver
            .solve(&linspace(0.0, total_time, steps + 1))
            .unwrap();

        errors.push((solution.final_state()[0] - exact).abs());
    }

    // Check convergence ratios
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 16 for fourth-order
        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_euler_and_rk4_agree_on_fine_grids() {
    // On a fine enough grid both strategies approximate the same solution
    let decay_rate = 0.2;
    let total_time = 4.0;
    let grid = linspace(0.0, total_time, 4001);

    let euler = solver_for(
        Box::new(ExponentialDecay::new(decay_rate)),
        Box::new(ForwardEuler::new()),
        DVector::from_vec(vec![1.0]),
    )
    .solve(&grid)
    .unwrap();

    let rk4 = solver_for(
        Box::new(ExponentialDecay::new(decay_rate)),
        Box::new(Rk4::new()),
        DVector::from_vec(vec![1.0]),
    )
    .solve(&grid)
    .unwrap();

    let difference = (euler.final_state()[0] - rk4.final_state()[0]).abs();
    assert!(difference < 1e-4, "strategies diverge: {}", difference);
}

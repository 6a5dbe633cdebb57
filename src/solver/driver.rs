//! Generic time-stepping driver
//!
//! The driver owns the pieces of a run (vector field, initial condition,
//! stepping strategy) and walks a caller-supplied time grid in order,
//! producing the full trajectory. It knows nothing about what the equations
//! mean; the update formula is delegated entirely to the strategy.

use nalgebra::DMatrix;

use crate::dynamics::VectorField;
use crate::solver::methods::ForwardEuler;
use crate::solver::traits::{InitialCondition, Solution, SolveError, StepStrategy};

// =================================================================================================
// ODE Solver Driver
// =================================================================================================

/// Time-stepping driver for first-order ODE systems
///
/// # Lifecycle
///
/// 1. Construct with a vector field (and optionally a stepping strategy;
///    the default is [`ForwardEuler`])
/// 2. Install initial conditions; this fixes the system dimension
/// 3. Call [`solve`](Self::solve) with a strictly increasing time grid
///
/// Each call to `solve` is an independent run starting from the installed
/// initial condition; trajectories are never reused across runs.
///
/// # Example
///
/// ```rust
/// use epi_rs::models::Sir;
/// use epi_rs::solver::{linspace, OdeSolver, Rk4};
///
/// # fn main() -> Result<(), epi_rs::solver::SolveError> {
/// let model = Sir::new(0.002, 0.5, 1000.0, 1.0, 0.0);
///
/// // Strategy is chosen at construction and fixed for the run
/// let mut solver = OdeSolver::with_strategy(Box::new(model.clone()), Box::new(Rk4::new()));
/// solver.install_initial_conditions(model.initial_conditions())?;
///
/// let solution = solver.solve(&linspace(0.0, 60.0, 601))?;
/// assert_eq!(solution.dimension(), 3);
/// # Ok(())
/// # }
/// ```
pub struct OdeSolver {
    /// Right-hand side of the system
    field: Option<Box<dyn VectorField>>,

    /// Installed initial condition; fixes the system dimension
    initial: Option<InitialCondition>,

    /// Per-step update rule, fixed for the lifetime of a run
    strategy: Box<dyn StepStrategy>,
}

impl OdeSolver {
    /// Create a solver over a vector field, stepping with Forward Euler
    pub fn new(field: Box<dyn VectorField>) -> Self {
        Self::with_strategy(field, Box::new(ForwardEuler::new()))
    }

    /// Create a solver with an explicit stepping strategy
    pub fn with_strategy(field: Box<dyn VectorField>, strategy: Box<dyn StepStrategy>) -> Self {
        Self {
            field: Some(field),
            initial: None,
            strategy,
        }
    }

    /// Create an empty solver; the field must be set before solving
    pub fn empty() -> Self {
        Self {
            field: None,
            initial: None,
            strategy: Box::new(ForwardEuler::new()),
        }
    }

    /// Store the right-hand side
    ///
    /// No mathematical validation is performed here; a misbehaving field
    /// only surfaces when it is evaluated during a solve.
    pub fn set_vector_field(&mut self, field: Box<dyn VectorField>) {
        self.field = Some(field);
    }

    /// Name of the installed stepping strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Install the initial condition and fix the system dimension
    ///
    /// Accepts anything convertible to [`InitialCondition`]: a scalar
    /// (`f64`), a `Vec<f64>`, a slice, or a `DVector<f64>`.
    ///
    /// # Errors
    ///
    /// - [`SolveError::InvalidInitialCondition`] when the input is empty, or
    ///   when re-installing would change the dimension established by a
    ///   previous install.
    pub fn install_initial_conditions(
        &mut self,
        u0: impl Into<InitialCondition>,
    ) -> Result<(), SolveError> {
        let u0 = u0.into();

        if u0.dimension() == 0 {
            return Err(SolveError::InvalidInitialCondition(
                "initial condition is empty".to_string(),
            ));
        }

        if let Some(previous) = &self.initial {
            if previous.dimension() != u0.dimension() {
                return Err(SolveError::InvalidInitialCondition(format!(
                    "system dimension is fixed at {}, cannot re-install with dimension {}",
                    previous.dimension(),
                    u0.dimension()
                )));
            }
        }

        self.initial = Some(u0);
        Ok(())
    }

    /// Integrate over a strictly increasing time grid
    ///
    /// Allocates an `n × m` trajectory, seeds row 0 with the installed
    /// initial condition, then computes each following row from its
    /// predecessor via the stepping strategy. Row `i + 1` is only ever
    /// computed after row `i` is final: the loop carries a strict data
    /// dependency and runs sequentially.
    ///
    /// # Errors
    ///
    /// - [`SolveError::NotInitialized`] without a field and initial condition
    /// - [`SolveError::InvalidInitialCondition`] when the installed initial
    ///   condition and the field disagree about the system dimension
    /// - [`SolveError::InvalidTimeGrid`] for fewer than two points or a grid
    ///   that is not strictly increasing (checked before allocation)
    /// - [`SolveError::VectorFieldEvaluation`] when the field misbehaves at
    ///   some step; the partially filled trajectory is discarded
    pub fn solve(&self, time_points: &[f64]) -> Result<Solution, SolveError> {

        // ====== Step 1: Validation ======

        let field = self
            .field
            .as_ref()
            .ok_or(SolveError::NotInitialized("no vector field installed"))?;

        let initial = self
            .initial
            .as_ref()
            .ok_or(SolveError::NotInitialized("no initial condition installed"))?;

        // Field and initial condition are installed independently, so their
        // dimensions can only be reconciled here. Without this check a
        // mismatched state would be indexed out of bounds inside the field.
        if initial.dimension() != field.dimension() {
            return Err(SolveError::InvalidInitialCondition(format!(
                "initial condition has dimension {} but field \"{}\" has dimension {}",
                initial.dimension(),
                field.name(),
                field.dimension()
            )));
        }

        validate_time_grid(time_points)?;

        // ====== Step 2: Setup ======

        let n = time_points.len();
        let m = initial.dimension();

        let mut trajectory = DMatrix::zeros(n, m);

        // Seed row 0 with the initial condition exactly; no arithmetic
        // touches it, so it is reproduced bit-for-bit in the result.
        let mut state = initial.to_state();
        trajectory.row_mut(0).tr_copy_from(&state);

        // ====== Step 3: Time Integration ======

        // For each interval [t_i, t_{i+1}] the strategy receives the
        // finalized state at t_i together with both bracketing times; there
        // is no shared step counter between driver and strategy.
        for i in 0..n - 1 {
            state = self
                .strategy
                .advance(&state, field.as_ref(), time_points[i], time_points[i + 1])?;

            if state.iter().any(|x| !x.is_finite()) {
                return Err(SolveError::VectorFieldEvaluation {
                    time: time_points[i + 1],
                    reason: "state contains NaN or Inf after update; \
                             this indicates numerical instability, \
                             try a finer time grid"
                        .to_string(),
                });
            }

            trajectory.row_mut(i + 1).tr_copy_from(&state);
        }

        // ====== Step 4: Build Result ======

        let mut solution = Solution::new(time_points.to_vec(), trajectory);

        solution.add_metadata("solver", self.strategy.name());
        solution.add_metadata("field", field.name());
        solution.add_metadata("grid points", &n.to_string());
        solution.add_metadata("dimension", &m.to_string());

        Ok(solution)
    }
}

/// Reject grids with fewer than two points or non-increasing times
fn validate_time_grid(time_points: &[f64]) -> Result<(), SolveError> {
    if time_points.len() < 2 {
        return Err(SolveError::InvalidTimeGrid(format!(
            "need at least 2 time points, got {}",
            time_points.len()
        )));
    }

    for (i, window) in time_points.windows(2).enumerate() {
        if !(window[1] > window[0]) {
            return Err(SolveError::InvalidTimeGrid(format!(
                "time points must be strictly increasing, but t[{}] = {} and t[{}] = {}",
                i,
                window[0],
                i + 1,
                window[1]
            )));
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

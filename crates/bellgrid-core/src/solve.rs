use bellgrid_mdp::{ACTION_NAMES, GridWorld, TransitionMatrices};
use serde::Serialize;
use tracing::info;

use crate::{
    SolveConfig, SolveError,
    solver::{Convergence, Policy, evaluate_policy, extract_policy, value_iteration_with_hook},
};

/// Value and policy grids for one solved grid world, in row-major layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridWorldSolution {
    pub values: Vec<Vec<f64>>,
    pub policy: Vec<Vec<&'static str>>,
    pub grid_size: usize,
    pub gamma: f64,
    /// Value-iteration sweeps performed.
    pub iterations: usize,
}

impl GridWorldSolution {
    /// Serialize as a JSON object.
    pub fn to_json(&self) -> Result<String, SolveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Value at `(row, col)`, if it lies on the grid.
    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    /// Action label at `(row, col)`, if it lies on the grid.
    pub fn action_at(&self, row: usize, col: usize) -> Option<&'static str> {
        self.policy.get(row)?.get(col).copied()
    }
}

/// Gap between the iterated values and the exact value of the extracted policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossCheck {
    pub max_abs_gap: f64,
    /// `theta / (1 - gamma)`, infinite when `gamma == 1`.
    pub tolerance: f64,
    pub sweeps: usize,
}

impl CrossCheck {
    pub fn within_tolerance(&self) -> bool {
        self.max_abs_gap <= self.tolerance
    }
}

struct Pipeline {
    matrices: TransitionMatrices,
    convergence: Convergence,
    policy: Policy,
}

/// Solve the classical grid world of side `grid_size` by value iteration.
///
/// Sweeps are unbounded, so `gamma == 1` does not return; callers needing a bound
/// should use [`solve`] with `max_sweeps` set or wrap the call in their own timeout.
pub fn solve_grid_world(
    grid_size: usize,
    gamma: f64,
    theta: f64,
) -> Result<GridWorldSolution, SolveError> {
    solve(&SolveConfig {
        grid_size,
        gamma,
        theta,
        max_sweeps: None,
    })
}

/// Validate `config`, then build the grid, iterate to convergence, and extract the greedy policy.
pub fn solve(config: &SolveConfig) -> Result<GridWorldSolution, SolveError> {
    let pipeline = run_pipeline(config)?;
    let size = config.grid_size;

    let values = pipeline
        .convergence
        .values
        .to_vec()
        .chunks(size)
        .map(<[f64]>::to_vec)
        .collect();

    let policy = pipeline
        .policy
        .actions()
        .chunks(size)
        .enumerate()
        .map(|(row, actions)| {
            actions
                .iter()
                .enumerate()
                .map(|(col, &action)| {
                    ACTION_NAMES
                        .get(action)
                        .copied()
                        .ok_or(SolveError::InvalidPolicyAction {
                            state: row * size + col,
                            action,
                            num_actions: ACTION_NAMES.len(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GridWorldSolution {
        values,
        policy,
        grid_size: size,
        gamma: config.gamma,
        iterations: pipeline.convergence.sweeps,
    })
}

/// Solve `config` and compare the iterated values with an exact evaluation of the resulting policy.
pub fn cross_check(config: &SolveConfig) -> Result<CrossCheck, SolveError> {
    let pipeline = run_pipeline(config)?;
    let exact = evaluate_policy(&pipeline.matrices, &pipeline.policy, config.gamma)?;

    let max_abs_gap = pipeline
        .convergence
        .values
        .iter()
        .zip(exact.iter())
        .map(|(iterated, exact)| (iterated - exact).abs())
        .fold(0.0_f64, f64::max);
    let tolerance = if config.gamma < 1.0 {
        config.theta / (1.0 - config.gamma)
    } else {
        f64::INFINITY
    };

    Ok(CrossCheck {
        max_abs_gap,
        tolerance,
        sweeps: pipeline.convergence.sweeps,
    })
}

fn run_pipeline(config: &SolveConfig) -> Result<Pipeline, SolveError> {
    config.validate()?;

    let grid = GridWorld::new(config.grid_size)?;
    let matrices = grid.build_matrices();
    let convergence = value_iteration_with_hook(&matrices, config.iteration_params(), |_| {})?;
    let policy = extract_policy(&matrices, &convergence.values, config.gamma)?;

    info!(
        grid_size = config.grid_size,
        gamma = config.gamma,
        theta = config.theta,
        sweeps = convergence.sweeps,
        "solved grid world"
    );

    Ok(Pipeline {
        matrices,
        convergence,
        policy,
    })
}

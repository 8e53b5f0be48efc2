mod config;
mod error;
mod solve;
pub mod solver;

pub use config::{ConfigError, SolveConfig};
pub use error::SolveError;
pub use solve::{CrossCheck, GridWorldSolution, cross_check, solve, solve_grid_world};
pub use solver::{
    Convergence, IterationParams, Policy, SweepMetrics, evaluate_policy, extract_policy,
    value_iteration, value_iteration_with_hook,
};

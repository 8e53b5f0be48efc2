use bellgrid_mdp::MdpError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
/// Error type for solving, policy extraction, and exact evaluation.
pub enum SolveError {
    #[error("invalid solve configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("grid model error: {0}")]
    Model(#[from] MdpError),

    #[error("gamma must be finite and within [0, 1], got {0}")]
    InvalidGamma(f64),

    #[error("theta must be finite and greater than 0, got {0}")]
    InvalidTheta(f64),

    #[error("value function has {actual} entries, expected {expected}")]
    ValueLength { expected: usize, actual: usize },

    #[error("policy has {actual} entries, expected {expected}")]
    PolicyLength { expected: usize, actual: usize },

    #[error("policy selects action {action} in state {state}, but only {num_actions} actions exist")]
    InvalidPolicyAction {
        state: usize,
        action: usize,
        num_actions: usize,
    },

    #[error("linear system (I - gamma * P_pi) is singular: best pivot {pivot:e} in column {column}")]
    SingularSystem { column: usize, pivot: f64 },

    #[error("exact policy evaluation produced a non-finite value for state {state}")]
    NonFiniteSolution { state: usize },

    #[error(
        "value iteration did not converge within {sweeps} sweeps (last delta {delta:e}, theta {theta:e})"
    )]
    NotConverged { sweeps: usize, delta: f64, theta: f64 },

    #[error("failed to serialize solution: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

use crate::{Coord, StateKey};

#[derive(Debug, Error)]
/// Error type for grid construction, layout IO, and transition matrix validation.
pub enum MdpError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid size {size} is outside the supported range [{min}, {max}]")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("state {} is outside a grid with {num_states} states", .state.index())]
    StateOutOfBounds { state: StateKey, num_states: usize },

    #[error("coordinate ({}, {}) is outside a {size}x{size} grid", .coord.row, .coord.col)]
    CoordOutOfBounds { coord: Coord, size: usize },

    #[error(
        "teleport {index} {role} ({}, {}) is outside a {size}x{size} grid",
        .coord.row,
        .coord.col
    )]
    TeleportOutOfBounds {
        index: usize,
        role: &'static str,
        coord: Coord,
        size: usize,
    },

    #[error("teleports {first} and {second} share the source cell ({}, {})", .source_cell.row, .source_cell.col)]
    OverlappingTeleports {
        first: usize,
        second: usize,
        source_cell: Coord,
    },

    #[error(
        "transition tensor shape {transitions:?} and reward shape {rewards:?} do not describe a non-empty model"
    )]
    ShapeMismatch {
        transitions: Vec<usize>,
        rewards: Vec<usize>,
    },

    #[error("invalid probability for state {state}, action {action}, next state {next}: {value}")]
    InvalidProbability {
        state: usize,
        action: usize,
        next: usize,
        value: f64,
    },

    #[error(
        "probability sum for state {state}, action {action} must be within {tolerance} of 1.0, got {sum}"
    )]
    ProbabilitySum {
        state: usize,
        action: usize,
        sum: f64,
        tolerance: f64,
    },

    #[error("invalid reward for state {state}, action {action}: {value}")]
    InvalidReward {
        state: usize,
        action: usize,
        value: f64,
    },

    #[error("teleport {index} has a non-finite reward: {value}")]
    InvalidTeleportReward { index: usize, value: f64 },
}

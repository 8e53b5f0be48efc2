mod action;
mod builder;
mod error;
mod grid;
mod ids;
mod io;
mod layout;
mod matrices;
mod simulator;

pub use action::{ACTION_NAMES, Action};
pub use builder::GridWorldBuilder;
pub use error::MdpError;
pub use grid::{BOUNDARY_REWARD, GridWorld, MOVE_REWARD};
pub use ids::{Coord, StateKey};
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use layout::{
    GridLayout, MAX_GRID_SIZE, MIN_GRID_SIZE, TELEPORT_A_REWARD, TELEPORT_B_REWARD, Teleport,
};
pub use matrices::{PROB_TOLERANCE, TransitionMatrices};
pub use simulator::{GridSimulator, Trajectory, TrajectoryStep};

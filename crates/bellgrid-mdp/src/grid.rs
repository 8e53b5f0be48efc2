use ndarray::{Array2, Array3};
use tracing::debug;

use crate::{Action, Coord, GridLayout, MdpError, StateKey, Teleport, TransitionMatrices};

/// Reward for bumping into the edge of the grid.
pub const BOUNDARY_REWARD: f64 = -1.0;
/// Reward for an ordinary move.
pub const MOVE_REWARD: f64 = 0.0;

#[derive(Debug, Clone)]
/// Immutable square grid model with deterministic moves and teleporting special cells.
pub struct GridWorld {
    size: usize,
    teleports: Vec<Teleport>,
}

impl GridWorld {
    /// Build a grid with the classical A/B teleport layout.
    pub fn new(size: usize) -> Result<Self, MdpError> {
        GridLayout::classic(size).compile()
    }

    /// Build from an already validated layout.
    pub(crate) fn from_layout(layout: &GridLayout) -> Self {
        GridWorld {
            size: layout.size,
            teleports: layout.teleports.clone(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_states(&self) -> usize {
        self.size * self.size
    }

    pub fn num_actions(&self) -> usize {
        Action::COUNT
    }

    pub fn teleports(&self) -> &[Teleport] {
        &self.teleports
    }

    /// Describe this grid as a serializable layout.
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            size: self.size,
            teleports: self.teleports.clone(),
        }
    }

    pub fn state_to_coord(&self, state: StateKey) -> Result<Coord, MdpError> {
        if state.index() >= self.num_states() {
            return Err(MdpError::StateOutOfBounds {
                state,
                num_states: self.num_states(),
            });
        }
        Ok(Coord::new(state.index() / self.size, state.index() % self.size))
    }

    pub fn coord_to_state(&self, coord: Coord) -> Result<StateKey, MdpError> {
        if !coord.within(self.size) {
            return Err(MdpError::CoordOutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(self.key_of(coord))
    }

    /// Deterministic `(next_state, reward)` for taking `action` in `state`.
    pub fn step(&self, state: StateKey, action: Action) -> Result<(StateKey, f64), MdpError> {
        let coord = self.state_to_coord(state)?;
        let (next, reward) = self.transition(coord, action);
        Ok((self.key_of(next), reward))
    }

    /// Materialize the dense `[N, A, N]` transition tensor and `[N, A]` reward matrix.
    pub fn build_matrices(&self) -> TransitionMatrices {
        let num_states = self.num_states();
        let mut transitions = Array3::zeros((num_states, Action::COUNT, num_states));
        let mut rewards = Array2::zeros((num_states, Action::COUNT));

        for row in 0..self.size {
            for col in 0..self.size {
                let coord = Coord::new(row, col);
                let state = self.key_of(coord).index();
                for action in Action::ALL {
                    let (next, reward) = self.transition(coord, action);
                    transitions[[state, action.index(), self.key_of(next).index()]] = 1.0;
                    rewards[[state, action.index()]] = reward;
                }
            }
        }

        debug!(
            size = self.size,
            num_states,
            teleports = self.teleports.len(),
            "built grid transition matrices"
        );
        TransitionMatrices::from_parts(transitions, rewards)
    }

    fn key_of(&self, coord: Coord) -> StateKey {
        StateKey::from(coord.row * self.size + coord.col)
    }

    // Teleports take priority over the chosen action, first match wins.
    fn transition(&self, coord: Coord, action: Action) -> (Coord, f64) {
        if let Some(teleport) = self.teleports.iter().find(|t| t.source == coord) {
            return (teleport.destination, teleport.reward);
        }

        match coord.offset(action.delta(), self.size) {
            Some(next) => (next, MOVE_REWARD),
            None => (coord, BOUNDARY_REWARD),
        }
    }
}

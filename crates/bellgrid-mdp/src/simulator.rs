use crate::{Action, GridWorld, MdpError, StateKey};

#[derive(Debug, Clone, Copy, PartialEq)]
/// One move recorded by the simulator.
pub struct TrajectoryStep {
    pub state: StateKey,
    pub action: Action,
    pub next_state: StateKey,
    pub reward: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// The path walked from a start state together with its discounted return.
pub struct Trajectory {
    pub steps: Vec<TrajectoryStep>,
    pub discounted_return: f64,
}

impl Trajectory {
    /// States visited in order, including the start and the final state.
    pub fn states(&self) -> Vec<StateKey> {
        let mut states: Vec<StateKey> = self.steps.iter().map(|step| step.state).collect();
        if let Some(last) = self.steps.last() {
            states.push(last.next_state);
        }
        states
    }
}

#[derive(Debug, Clone)]
/// Walks a grid under a caller supplied policy.
/// The grid is deterministic, so the same policy always yields the same trajectory.
pub struct GridSimulator<'a> {
    grid: &'a GridWorld,
    gamma: f64,
}

impl<'a> GridSimulator<'a> {
    pub fn new(grid: &'a GridWorld, gamma: f64) -> Self {
        Self { grid, gamma }
    }

    /// Borrow the underlying grid.
    pub fn grid(&self) -> &GridWorld {
        self.grid
    }

    /// Follow `policy` from `start` for exactly `steps` moves.
    pub fn run<F>(
        &self,
        start: StateKey,
        steps: usize,
        mut policy: F,
    ) -> Result<Trajectory, MdpError>
    where
        F: FnMut(StateKey) -> Action,
    {
        let mut state = start;
        let mut discount = 1.0;
        let mut discounted_return = 0.0;
        let mut recorded = Vec::with_capacity(steps);

        // Reject a bad start even when no step is taken.
        self.grid.state_to_coord(start)?;

        for _ in 0..steps {
            let action = policy(state);
            let (next_state, reward) = self.grid.step(state, action)?;
            discounted_return += discount * reward;
            discount *= self.gamma;

            recorded.push(TrajectoryStep {
                state,
                action,
                next_state,
                reward,
            });
            state = next_state;
        }

        Ok(Trajectory {
            steps: recorded,
            discounted_return,
        })
    }
}

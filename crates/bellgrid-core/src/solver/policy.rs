use bellgrid_mdp::TransitionMatrices;
use ndarray::Array1;

use crate::SolveError;
use crate::solver::bellman::{action_values, argmax, check_gamma, check_values};

/// Deterministic policy: one action index per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    actions: Vec<usize>,
}

impl Policy {
    pub fn new(actions: Vec<usize>) -> Self {
        Policy { actions }
    }

    /// Action chosen in `state`, if the state exists.
    pub fn action(&self, state: usize) -> Option<usize> {
        self.actions.get(state).copied()
    }

    pub fn actions(&self) -> &[usize] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub(crate) fn check(&self, matrices: &TransitionMatrices) -> Result<(), SolveError> {
        if self.actions.len() != matrices.num_states() {
            return Err(SolveError::PolicyLength {
                expected: matrices.num_states(),
                actual: self.actions.len(),
            });
        }
        if let Some((state, &action)) = self
            .actions
            .iter()
            .enumerate()
            .find(|(_, action)| **action >= matrices.num_actions())
        {
            return Err(SolveError::InvalidPolicyAction {
                state,
                action,
                num_actions: matrices.num_actions(),
            });
        }
        Ok(())
    }
}

impl From<Vec<usize>> for Policy {
    fn from(actions: Vec<usize>) -> Self {
        Policy::new(actions)
    }
}

/// Greedy policy with respect to `values`: one pass over states and actions, lowest index wins ties.
pub fn extract_policy(
    matrices: &TransitionMatrices,
    values: &Array1<f64>,
    gamma: f64,
) -> Result<Policy, SolveError> {
    check_gamma(gamma)?;
    check_values(matrices, values.len())?;

    let mut q = Vec::with_capacity(matrices.num_actions());
    let actions = (0..matrices.num_states())
        .map(|state| {
            q.clear();
            q.extend(action_values(matrices, values.view(), state, gamma));
            argmax(&q).unwrap_or(0)
        })
        .collect();
    Ok(Policy::new(actions))
}

use ndarray::{Array2, Array3, ArrayView1, s};

use crate::MdpError;

/// Floating point tolerance used when validating probability sums.
pub const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
/// Dense transition tensor `P[s, a, s']` and reward matrix `R[s, a]`.
///
/// Rows of `P` may hold any distribution; nothing downstream assumes one-hot rows.
pub struct TransitionMatrices {
    transitions: Array3<f64>,
    rewards: Array2<f64>,
}

impl TransitionMatrices {
    /// Validate and wrap a caller supplied model.
    pub fn new(transitions: Array3<f64>, rewards: Array2<f64>) -> Result<Self, MdpError> {
        let (num_states, num_actions, num_next) = transitions.dim();
        if num_states == 0
            || num_actions == 0
            || num_states != num_next
            || rewards.dim() != (num_states, num_actions)
        {
            return Err(MdpError::ShapeMismatch {
                transitions: transitions.shape().to_vec(),
                rewards: rewards.shape().to_vec(),
            });
        }

        for state in 0..num_states {
            for action in 0..num_actions {
                let row = transitions.slice(s![state, action, ..]);
                let mut sum = 0.0_f64;
                for (next, &prob) in row.iter().enumerate() {
                    if !prob.is_finite() || prob < 0.0 {
                        return Err(MdpError::InvalidProbability {
                            state,
                            action,
                            next,
                            value: prob,
                        });
                    }
                    sum += prob;
                }

                if (sum - 1.0).abs() > PROB_TOLERANCE {
                    return Err(MdpError::ProbabilitySum {
                        state,
                        action,
                        sum,
                        tolerance: PROB_TOLERANCE,
                    });
                }

                let reward = rewards[[state, action]];
                if !reward.is_finite() {
                    return Err(MdpError::InvalidReward {
                        state,
                        action,
                        value: reward,
                    });
                }
            }
        }

        Ok(Self::from_parts(transitions, rewards))
    }

    /// Wrap matrices the caller already knows to be well formed.
    pub(crate) fn from_parts(transitions: Array3<f64>, rewards: Array2<f64>) -> Self {
        TransitionMatrices {
            transitions,
            rewards,
        }
    }

    pub fn num_states(&self) -> usize {
        self.rewards.nrows()
    }

    pub fn num_actions(&self) -> usize {
        self.rewards.ncols()
    }

    /// The full `[N, A, N]` tensor.
    pub fn transitions(&self) -> &Array3<f64> {
        &self.transitions
    }

    /// The full `[N, A]` reward matrix.
    pub fn rewards(&self) -> &Array2<f64> {
        &self.rewards
    }

    /// Next-state distribution `P[state, action, :]`.
    ///
    /// Panics if either index is out of range.
    pub fn distribution(&self, state: usize, action: usize) -> ArrayView1<'_, f64> {
        self.transitions.slice(s![state, action, ..])
    }

    /// Immediate reward `R[state, action]`. Panics if either index is out of range.
    pub fn reward(&self, state: usize, action: usize) -> f64 {
        self.rewards[[state, action]]
    }
}

use bellgrid_mdp::TransitionMatrices;
use ndarray::ArrayView1;

use crate::SolveError;

/// One-step lookahead `R[s,a] + gamma * sum_s' P[s,a,s'] * V[s']`.
///
/// The dot product runs over the full next-state distribution, so stochastic rows work too.
pub fn q_value(
    matrices: &TransitionMatrices,
    values: ArrayView1<'_, f64>,
    state: usize,
    action: usize,
    gamma: f64,
) -> f64 {
    matrices.reward(state, action) + gamma * matrices.distribution(state, action).dot(&values)
}

/// Index of the largest entry. Ties go to the lowest index.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Q values of every action in `state`, in action index order.
pub(crate) fn action_values<'a>(
    matrices: &'a TransitionMatrices,
    values: ArrayView1<'a, f64>,
    state: usize,
    gamma: f64,
) -> impl Iterator<Item = f64> + 'a {
    (0..matrices.num_actions()).map(move |action| q_value(matrices, values, state, action, gamma))
}

pub(crate) fn check_gamma(gamma: f64) -> Result<(), SolveError> {
    if gamma.is_finite() && (0.0..=1.0).contains(&gamma) {
        Ok(())
    } else {
        Err(SolveError::InvalidGamma(gamma))
    }
}

pub(crate) fn check_theta(theta: f64) -> Result<(), SolveError> {
    if theta.is_finite() && theta > 0.0 {
        Ok(())
    } else {
        Err(SolveError::InvalidTheta(theta))
    }
}

pub(crate) fn check_values(matrices: &TransitionMatrices, len: usize) -> Result<(), SolveError> {
    if len == matrices.num_states() {
        Ok(())
    } else {
        Err(SolveError::ValueLength {
            expected: matrices.num_states(),
            actual: len,
        })
    }
}

use bellgrid_mdp::TransitionMatrices;
use ndarray::{Array1, Array2};
use tracing::debug;

use crate::SolveError;
use crate::solver::bellman::check_gamma;
use crate::solver::linalg::solve_linear_system;
use crate::solver::policy::Policy;

/// Exact value of a fixed policy: `V = (I - gamma * P_pi)^-1 * R_pi`, by direct solve.
///
/// Fails with [`SolveError::SingularSystem`] when `I - gamma * P_pi` has no inverse, which
/// is always the case for `gamma == 1` on a closed grid since every row of `P_pi` sums to 1.
pub fn evaluate_policy(
    matrices: &TransitionMatrices,
    policy: &Policy,
    gamma: f64,
) -> Result<Array1<f64>, SolveError> {
    check_gamma(gamma)?;
    policy.check(matrices)?;

    let num_states = matrices.num_states();
    let mut system = Array2::<f64>::eye(num_states);
    let mut rewards = Array1::<f64>::zeros(num_states);

    for (state, &action) in policy.actions().iter().enumerate() {
        system
            .row_mut(state)
            .scaled_add(-gamma, &matrices.distribution(state, action));
        rewards[state] = matrices.reward(state, action);
    }

    let values = solve_linear_system(system, rewards)?;
    debug!(num_states, gamma, "evaluated policy exactly");
    Ok(values)
}

mod property_solver_tests;

use bellgrid_mdp::{GridWorld, TransitionMatrices};
use ndarray::{Array2, Array3};

pub(super) fn classic_matrices(size: usize) -> TransitionMatrices {
    GridWorld::new(size)
        .expect("valid grid size")
        .build_matrices()
}

/// Single-action model built from explicit `(next, prob)` rows and rewards.
pub(super) fn single_action_model(rows: &[&[(usize, f64)]], rewards: &[f64]) -> TransitionMatrices {
    let n = rows.len();
    let mut transitions = Array3::<f64>::zeros((n, 1, n));
    let mut reward_matrix = Array2::<f64>::zeros((n, 1));
    for (state, row) in rows.iter().enumerate() {
        for &(next, prob) in row.iter() {
            transitions[[state, 0, next]] = prob;
        }
        reward_matrix[[state, 0]] = rewards[state];
    }
    TransitionMatrices::new(transitions, reward_matrix).expect("valid model")
}

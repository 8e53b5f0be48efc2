use bellgrid_mdp::TransitionMatrices;
use ndarray::Array1;
use tracing::{debug, trace, warn};

use crate::SolveError;
use crate::solver::bellman::{action_values, check_gamma, check_theta};

/// Stopping parameters for value iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationParams {
    pub gamma: f64,
    pub theta: f64,
    /// `None` keeps sweeping until `delta < theta`.
    pub max_sweeps: Option<usize>,
}

impl IterationParams {
    pub fn new(gamma: f64, theta: f64) -> Self {
        IterationParams {
            gamma,
            theta,
            max_sweeps: None,
        }
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = Some(max_sweeps);
        self
    }
}

/// Per-sweep metrics emitted by value iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepMetrics {
    /// 1-based sweep number.
    pub sweep: usize,
    /// Largest absolute change of any state value in this sweep.
    pub delta: f64,
}

/// Result of a converged value iteration run.
#[derive(Debug, Clone)]
pub struct Convergence {
    pub values: Array1<f64>,
    pub sweeps: usize,
    pub final_delta: f64,
}

/// Iterate the Bellman optimality operator from `V = 0` until the largest change drops below `theta`.
///
/// There is no sweep limit. With `gamma == 1` the operator need not contract and
/// this may never return; use [`value_iteration_with_hook`] with `max_sweeps` to bound it.
pub fn value_iteration(
    matrices: &TransitionMatrices,
    gamma: f64,
    theta: f64,
) -> Result<Convergence, SolveError> {
    value_iteration_with_hook(matrices, IterationParams::new(gamma, theta), |_| {})
}

/// Run value iteration and invoke a callback after each completed sweep.
///
/// Sweeps are synchronous: every state in a sweep reads the values from the end of the previous one.
pub fn value_iteration_with_hook<FHook>(
    matrices: &TransitionMatrices,
    params: IterationParams,
    mut on_sweep: FHook,
) -> Result<Convergence, SolveError>
where
    FHook: FnMut(&SweepMetrics),
{
    check_gamma(params.gamma)?;
    check_theta(params.theta)?;
    if params.max_sweeps == Some(0) {
        return Err(SolveError::NotConverged {
            sweeps: 0,
            delta: f64::INFINITY,
            theta: params.theta,
        });
    }

    let num_states = matrices.num_states();
    let mut values = Array1::<f64>::zeros(num_states);
    let mut next = Array1::<f64>::zeros(num_states);
    let mut sweep = 0;

    loop {
        sweep += 1;
        let mut delta = 0.0_f64;

        for state in 0..num_states {
            let best_q = action_values(matrices, values.view(), state, params.gamma)
                .fold(f64::NEG_INFINITY, f64::max);
            delta = delta.max((values[state] - best_q).abs());
            next[state] = best_q;
        }
        std::mem::swap(&mut values, &mut next);

        let metrics = SweepMetrics { sweep, delta };
        trace!(sweep, delta, "value iteration sweep");
        on_sweep(&metrics);

        if delta < params.theta {
            debug!(sweeps = sweep, delta, "value iteration converged");
            return Ok(Convergence {
                values,
                sweeps: sweep,
                final_delta: delta,
            });
        }

        if params.max_sweeps.is_some_and(|cap| sweep >= cap) {
            warn!(
                sweeps = sweep,
                delta,
                theta = params.theta,
                "value iteration hit its sweep cap"
            );
            return Err(SolveError::NotConverged {
                sweeps: sweep,
                delta,
                theta: params.theta,
            });
        }
    }
}

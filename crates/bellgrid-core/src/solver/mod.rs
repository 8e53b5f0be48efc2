mod bellman;
mod evaluation;
mod linalg;
mod policy;
mod value_iteration;

pub use bellman::{argmax, q_value};
pub use evaluation::evaluate_policy;
pub use linalg::SINGULAR_PIVOT_TOLERANCE;
pub use policy::{Policy, extract_policy};
pub use value_iteration::{
    Convergence, IterationParams, SweepMetrics, value_iteration, value_iteration_with_hook,
};

#[cfg(test)]
mod tests;

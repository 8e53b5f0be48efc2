use proptest::prelude::*;

use crate::{IterationParams, evaluate_policy, extract_policy, value_iteration_with_hook};

use super::classic_matrices;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn iterated_and_exact_values_agree(size in 3usize..=10, gamma in 0.5f64..0.95) {
        let theta = 1e-6;
        let matrices = classic_matrices(size);
        let mut last_delta = f64::INFINITY;
        let mut monotone = true;

        let result = value_iteration_with_hook(&matrices, IterationParams::new(gamma, theta), |m| {
            monotone &= m.delta <= last_delta + 1e-12;
            last_delta = m.delta;
        })
        .expect("gamma < 1 converges");
        prop_assert!(monotone);
        prop_assert!(result.sweeps < 1_000);

        let policy = extract_policy(&matrices, &result.values, gamma).expect("valid");
        let exact = evaluate_policy(&matrices, &policy, gamma).expect("invertible");
        let tolerance = theta / (1.0 - gamma);
        for (iterated, exact) in result.values.iter().zip(exact.iter()) {
            prop_assert!((iterated - exact).abs() <= tolerance);
        }
    }
}

use bellgrid_core::{
    ConfigError, SolveConfig, SolveError, cross_check, solve, solve_grid_world,
};

#[test]
fn repeated_solves_are_identical() {
    let first = solve_grid_world(6, 0.85, 1e-6).expect("solve should succeed");
    let second = solve_grid_world(6, 0.85, 1e-6).expect("solve should succeed");

    assert_eq!(first, second);
}

#[test]
fn solution_shape_echoes_inputs() {
    let solution = solve_grid_world(7, 0.8, 1e-5).expect("solve should succeed");

    assert_eq!(solution.grid_size, 7);
    assert_eq!(solution.gamma, 0.8);
    assert!(solution.iterations > 0);
    assert_eq!(solution.values.len(), 7);
    assert_eq!(solution.policy.len(), 7);
    assert!(solution.values.iter().all(|row| row.len() == 7));
    assert!(
        solution
            .policy
            .iter()
            .flatten()
            .all(|label| ["up", "down", "left", "right"].contains(label))
    );
    assert_eq!(solution.action_at(7, 0), None);
}

#[test]
fn invalid_inputs_are_rejected_before_solving() {
    let cases = [
        (2, 0.9, 1e-6),
        (11, 0.9, 1e-6),
        (5, 1.5, 1e-6),
        (5, -0.1, 1e-6),
        (5, 0.9, 0.0),
        (5, f64::NAN, 1e-6),
    ];

    for (grid_size, gamma, theta) in cases {
        let err = solve_grid_world(grid_size, gamma, theta).expect_err("input should be rejected");
        assert!(
            matches!(err, SolveError::Config(ConfigError::Invalid(_))),
            "unexpected error for ({grid_size}, {gamma}, {theta}): {err}"
        );
    }
}

#[test]
fn every_supported_size_solves() {
    for grid_size in 3..=10 {
        let solution = solve_grid_world(grid_size, 0.9, 1e-6).expect("solve should succeed");
        assert_eq!(solution.values.len(), grid_size);
        // Every action on special cell A lands in the same place, so the first one wins.
        assert_eq!(solution.action_at(0, 1), Some("up"));
    }
}

#[test]
fn capped_undiscounted_solve_reports_non_convergence() {
    let config = SolveConfig {
        grid_size: 5,
        gamma: 1.0,
        theta: 1e-6,
        max_sweeps: Some(25),
    };

    let err = solve(&config).expect_err("gamma = 1 does not settle");
    assert!(matches!(err, SolveError::NotConverged { sweeps: 25, .. }));
}

#[test]
fn cross_check_stays_within_tolerance() {
    let report = cross_check(&SolveConfig::default()).expect("cross check should succeed");

    assert!(report.within_tolerance(), "{report:?}");
    assert!((report.tolerance - 1e-5).abs() < 1e-12);
}

#[test]
fn config_loads_from_yaml_with_defaults() {
    let config = SolveConfig::from_yaml_str("grid_size: 8\n").expect("valid yaml");
    assert_eq!(config.grid_size, 8);
    assert_eq!(config.gamma, 0.9);
    assert_eq!(config.theta, 1e-6);
    assert_eq!(config.max_sweeps, None);

    let bundled = SolveConfig::from_default_yaml().expect("bundled config is valid");
    assert_eq!(bundled, SolveConfig::default());

    let err = SolveConfig::from_yaml_str("gamma: 2.0\n").expect_err("gamma out of range");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = SolveConfig::from_yaml_str("grid_size: [\n").expect_err("broken yaml");
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn solution_serializes_to_json() {
    let solution = solve_grid_world(3, 0.9, 1e-6).expect("solve should succeed");
    let json = solution.to_json().expect("serializable");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(parsed["grid_size"], 3);
    assert_eq!(parsed["gamma"], 0.9);
    assert_eq!(parsed["policy"][0][1], "up");
    assert_eq!(parsed["values"].as_array().map(Vec::len), Some(3));
}

use std::path::PathBuf;

use bellgrid_core::{SolveConfig, cross_check, solve};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bellgrid_core=info,bellgrid_mdp=warn")),
        )
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => SolveConfig::from_yaml_path(&path).expect("failed to load solve config"),
        None => SolveConfig::from_default_yaml().expect("bundled config is valid"),
    };

    let solution = solve(&config).expect("solve failed");
    let check = cross_check(&config).expect("cross check failed");

    println!(
        "grid_size={} gamma={} sweeps={}",
        solution.grid_size, solution.gamma, solution.iterations
    );
    for row in &solution.values {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:7.2}")).collect();
        println!("{}", cells.join(" "));
    }
    println!();
    for row in &solution.policy {
        let cells: Vec<String> = row.iter().map(|a| format!("{a:>7}")).collect();
        println!("{}", cells.join(" "));
    }
    println!(
        "max |V_iter - V_exact| = {:.3e} (tolerance {:.3e})",
        check.max_abs_gap, check.tolerance
    );
}

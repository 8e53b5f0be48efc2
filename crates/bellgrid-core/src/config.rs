use std::{fs, path::Path};

use bellgrid_mdp::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver::IterationParams;

const DEFAULT_SOLVE_CONFIG_YAML: &str = include_str!("../config/solve.default.yaml");

/// Inputs for one grid solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    pub grid_size: usize,
    pub gamma: f64,
    pub theta: f64,
    /// Upper bound on value-iteration sweeps. `None` sweeps until `theta` is met,
    /// which never happens for `gamma == 1` on this grid.
    pub max_sweeps: Option<usize>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            grid_size: 5,
            gamma: 0.9,
            theta: 1e-6,
            max_sweeps: None,
        }
    }
}

impl SolveConfig {
    /// Parse a solve config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SolveConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a solve config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVE_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, ConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Reject configurations no solve should start from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be within [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}], got {}",
                self.grid_size
            )));
        }
        if !self.gamma.is_finite() || !(0.0..=1.0).contains(&self.gamma) {
            return Err(ConfigError::Invalid(format!(
                "gamma must be within [0, 1], got {}",
                self.gamma
            )));
        }
        if !self.theta.is_finite() || self.theta <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "theta must be finite and > 0, got {}",
                self.theta
            )));
        }
        if self.max_sweeps == Some(0) {
            return Err(ConfigError::Invalid(
                "max_sweeps must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn iteration_params(&self) -> IterationParams {
        IterationParams {
            gamma: self.gamma,
            theta: self.theta,
            max_sweeps: self.max_sweeps,
        }
    }
}

/// Error type for loading and validating `SolveConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Invalid(String),
}

use std::{fs, path::Path};

use crate::{GridLayout, GridWorld, MdpError};

/// Load a grid layout from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GridLayout, MdpError> {
    let yaml = fs::read_to_string(path)?;
    let layout: GridLayout = serde_yaml::from_str(&yaml)?;
    Ok(layout)
}

/// Load and compile a grid from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<GridWorld, MdpError> {
    let layout = load_yaml(path)?;
    layout.compile()
}

/// Serialize and write a grid layout to YAML.
pub fn save_yaml(path: impl AsRef<Path>, layout: &GridLayout) -> Result<(), MdpError> {
    let yaml = serde_yaml::to_string(layout)?;
    fs::write(path, yaml)?;
    Ok(())
}

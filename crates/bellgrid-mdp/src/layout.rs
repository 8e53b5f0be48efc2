use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Coord, GridWorld, MdpError};

/// Smallest supported grid side length.
pub const MIN_GRID_SIZE: usize = 3;
/// Largest supported grid side length.
pub const MAX_GRID_SIZE: usize = 10;

/// Reward for leaving special cell A.
pub const TELEPORT_A_REWARD: f64 = 10.0;
/// Reward for leaving special cell B.
pub const TELEPORT_B_REWARD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// A special cell: every action taken on `source` lands on `destination` and pays `reward`.
pub struct Teleport {
    pub source: Coord,
    pub destination: Coord,
    pub reward: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Serializable grid description used for YAML IO and validation.
pub struct GridLayout {
    /// Side length of the square grid.
    pub size: usize,
    /// Special cells, checked in order when stepping.
    #[serde(default)]
    pub teleports: Vec<Teleport>,
}

impl GridLayout {
    /// The classical two-teleport layout: A=(0,1)->(4,1) paying 10, B=(0,3)->(2,3) paying 5.
    ///
    /// On grids narrower than five cells every coordinate is clamped to the last
    /// row/column so the layout stays on the board. A and B never collide because
    /// A sits in column 1 and B in column `min(3, size - 1) >= 2`.
    pub fn classic(size: usize) -> Self {
        let clamp = |row: usize, col: usize| {
            let last = size.saturating_sub(1);
            Coord::new(row.min(last), col.min(last))
        };

        GridLayout {
            size,
            teleports: vec![
                Teleport {
                    source: clamp(0, 1),
                    destination: clamp(4, 1),
                    reward: TELEPORT_A_REWARD,
                },
                Teleport {
                    source: clamp(0, 3),
                    destination: clamp(2, 3),
                    reward: TELEPORT_B_REWARD,
                },
            ],
        }
    }

    /// Validate grid bounds, teleport placement, and rewards.
    pub fn validate(&self) -> Result<(), MdpError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(MdpError::InvalidGridSize {
                size: self.size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        let mut sources: HashMap<Coord, usize> = HashMap::with_capacity(self.teleports.len());
        for (index, teleport) in self.teleports.iter().enumerate() {
            for (role, coord) in [
                ("source", teleport.source),
                ("destination", teleport.destination),
            ] {
                if !coord.within(self.size) {
                    return Err(MdpError::TeleportOutOfBounds {
                        index,
                        role,
                        coord,
                        size: self.size,
                    });
                }
            }

            if !teleport.reward.is_finite() {
                return Err(MdpError::InvalidTeleportReward {
                    index,
                    value: teleport.reward,
                });
            }

            // Two teleports on one cell would make the step ambiguous.
            if let Some(first) = sources.insert(teleport.source, index) {
                return Err(MdpError::OverlappingTeleports {
                    first,
                    second: index,
                    source_cell: teleport.source,
                });
            }
        }

        Ok(())
    }

    /// Validate and turn this layout into a grid model.
    pub fn compile(&self) -> Result<GridWorld, MdpError> {
        self.validate()?;
        Ok(GridWorld::from_layout(self))
    }
}

use crate::{Coord, GridLayout, GridWorld, MdpError, Teleport};

#[derive(Debug, Clone, Default)]
/// Struct to build grids with a custom set of teleporting cells
pub struct GridWorldBuilder {
    size: Option<usize>,
    teleports: Vec<Teleport>,
}

impl GridWorldBuilder {
    /// Create a new GridWorldBuilder with no teleports
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the classical A/B layout for `size`
    pub fn classic(size: usize) -> Self {
        let layout = GridLayout::classic(size);
        GridWorldBuilder {
            size: Some(layout.size),
            teleports: layout.teleports,
        }
    }

    /// Define the side length of the grid
    pub fn set_size(&mut self, size: usize) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Add a special cell
    /// Every action taken on `source` moves to `destination` and pays `reward`
    pub fn add_teleport(
        &mut self,
        source: impl Into<Coord>,
        destination: impl Into<Coord>,
        reward: f64,
    ) -> &mut Self {
        self.teleports.push(Teleport {
            source: source.into(),
            destination: destination.into(),
            reward,
        });
        self
    }

    /// Drop every teleport added so far
    pub fn clear_teleports(&mut self) -> &mut Self {
        self.teleports.clear();
        self
    }

    pub fn build_layout(self) -> Result<GridLayout, MdpError> {
        let size = self.size.unwrap_or(0);
        let layout = GridLayout {
            size,
            teleports: self.teleports,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn build(self) -> Result<GridWorld, MdpError> {
        let layout = self.build_layout()?;
        Ok(GridWorld::from_layout(&layout))
    }
}

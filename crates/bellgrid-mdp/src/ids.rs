use serde::{Deserialize, Serialize};

/// Dense index for a grid cell, `row * size + col`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(usize);

impl StateKey {
    /// Return the underlying state index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateKey {
    fn from(value: usize) -> Self {
        StateKey(value)
    }
}

/// A `(row, col)` position on the grid. Row 0 is the top edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Apply a signed delta, returning `None` when the result leaves `[0, size)` on either axis.
    pub(crate) fn offset(self, delta: (isize, isize), size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;
        (row < size && col < size).then_some(Coord { row, col })
    }

    pub(crate) fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

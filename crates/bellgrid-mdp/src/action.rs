use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels for each action, indexed by `Action::index`.
pub const ACTION_NAMES: [&str; 4] = ["up", "down", "left", "right"];

/// The four directional moves, in their fixed enumeration order.
///
/// The order matters: greedy policies break ties in favour of the lowest index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this action in `Action::ALL`.
    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// `(row, col)` displacement of the move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        ACTION_NAMES[self.index()]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

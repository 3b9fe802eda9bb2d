use std::fmt;

use super::direction::Direction;

/// Row/column position in a grid. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, or `None` when that would go above row 0 or
    /// left of column 0. The far edges are checked by [`Grid::step`].
    ///
    /// [`Grid::step`]: super::Grid::step
    pub fn checked_step(self, direction: Direction) -> Option<Self> {
        let Coord { row, col } = self;
        match direction {
            Direction::North => Some(Self::new(row.checked_sub(1)?, col)),
            Direction::South => Some(Self::new(row + 1, col)),
            Direction::East => Some(Self::new(row, col + 1)),
            Direction::West => Some(Self::new(row, col.checked_sub(1)?)),
        }
    }

    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

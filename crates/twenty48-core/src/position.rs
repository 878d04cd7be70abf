//! Cell coordinates on the 4x4 board.

use std::fmt;

use crate::board::SIZE;
use crate::direction::Direction;

/// A cell coordinate, row-major: `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Total number of cells.
    pub const COUNT: usize = SIZE * SIZE;

    #[inline]
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Row-major index (0..16).
    #[inline]
    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// The neighbouring position one step toward `dir`, or `None` at the edge.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.vector();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < SIZE && col < SIZE {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Iterate over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT).map(|i| Position::new(i / SIZE, i % SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::direction::Direction;

    #[test]
    fn all_is_row_major() {
        for (i, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::all().count(), Position::COUNT);
    }

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Position::new(0, 0).step(Direction::Up), None);
        assert_eq!(Position::new(0, 0).step(Direction::Left), None);
        assert_eq!(Position::new(3, 3).step(Direction::Down), None);
        assert_eq!(Position::new(3, 3).step(Direction::Right), None);
        assert_eq!(
            Position::new(1, 2).step(Direction::Down),
            Some(Position::new(2, 2))
        );
    }
}

//! The 4x4 board: tile storage, cell queries, and symmetries.

use std::fmt;

use crate::direction::Direction;
use crate::error::BoardError;
use crate::position::Position;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Largest tile a 4x4 game can produce. Larger values are rejected, which
/// keeps every reachable merge well inside `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// A 4x4 grid of tile values, row-major. `0` is an empty cell; every other
/// value is a power of two.
///
/// The board is `Copy`, so cloning is a 16-word copy. Search code clones a
/// board at every ply and mutates only its own copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    /// A board with no tiles.
    pub const EMPTY: Board = Board {
        cells: [[0; SIZE]; SIZE],
    };

    /// Build a board from rows of tile values, validating every tile.
    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Result<Board, BoardError> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Raw row-major access to the tile values.
    #[inline]
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Tile value at `pos` (0 when empty).
    #[inline]
    pub fn tile(&self, pos: Position) -> u32 {
        self.cells[pos.row][pos.col]
    }

    /// Set the cell at `pos` to `value`.
    ///
    /// Passing `0` clears the cell, which lets callers probe a spawn and
    /// revert it.
    #[inline]
    pub fn insert_tile(&mut self, pos: Position, value: u32) {
        debug_assert!(value == 0 || (value >= 2 && value.is_power_of_two()));
        self.cells[pos.row][pos.col] = value;
    }

    /// Return a copy of this board with `value` placed at `pos`.
    #[inline]
    pub fn with_tile(mut self, pos: Position, value: u32) -> Board {
        self.insert_tile(pos, value);
        self
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.tile(pos) == 0).collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Return `true` if `(row, col)` lies on the board.
    #[inline]
    pub const fn within_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < SIZE as isize && col >= 0 && col < SIZE as isize
    }

    /// Return `true` if `(row, col)` is on the board and holds a tile.
    ///
    /// Out-of-bounds coordinates are never dereferenced.
    #[inline]
    pub fn cell_occupied(&self, row: isize, col: isize) -> bool {
        Self::within_bounds(row, col) && self.cells[row as usize][col as usize] > 0
    }

    /// Return `true` if `(row, col)` is on the board and empty.
    #[inline]
    pub fn cell_available(&self, row: isize, col: isize) -> bool {
        Self::within_bounds(row, col) && self.cells[row as usize][col as usize] == 0
    }

    /// Walk from `pos` toward `dir` across empty cells.
    ///
    /// Returns the last position reached (which is `pos` itself when the
    /// neighbour is blocked) and the first blocking position, or `None` for
    /// the blocking position when the walk ran into the edge.
    pub fn farthest_position(&self, pos: Position, dir: Direction) -> (Position, Option<Position>) {
        let (dr, dc) = dir.vector();
        let (mut row, mut col) = (pos.row as isize, pos.col as isize);
        while self.cell_available(row + dr, col + dc) {
            row += dr;
            col += dc;
        }
        let farthest = Position::new(row as usize, col as usize);
        let (row, col) = (row + dr, col + dc);
        let next = self
            .cell_occupied(row, col)
            .then(|| Position::new(row as usize, col as usize));
        (farthest, next)
    }

    /// Mirror the board along its main diagonal.
    pub fn transpose(&self) -> Board {
        let mut out = Board::EMPTY;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.cells[c][r] = value;
            }
        }
        out
    }

    /// Rotate the board a quarter turn clockwise.
    pub fn rotate_clockwise(&self) -> Board {
        let mut out = Board::EMPTY;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.cells[c][SIZE - 1 - r] = value;
            }
        }
        out
    }

    /// Mirror the board left-to-right.
    pub fn flip_horizontal(&self) -> Board {
        let mut out = *self;
        for row in out.cells.iter_mut() {
            row.reverse();
        }
        out
    }

    /// Validate that every tile is 0 or a power of two in `2..=MAX_TILE`.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (row, values) in self.cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (!(2..=MAX_TILE).contains(&value) || !value.is_power_of_two()) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(())
    }

    /// Mutable row access for the move mechanics.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [[u32; SIZE]; SIZE] {
        &mut self.cells
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an aligned grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.max_tile().max(1).to_string().len();
        for (r, row) in self.0.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
                if c + 1 < SIZE {
                    write!(f, " ")?;
                }
            }
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

//! Slide-and-merge mechanics: apply a move to a board.

use crate::board::{Board, SIZE};
use crate::direction::Direction;
use crate::position::Position;

/// Positions of line `line` ordered from the edge tiles slide toward.
fn line_positions(dir: Direction, line: usize) -> [Position; SIZE] {
    let mut out = [Position::new(0, 0); SIZE];
    for (i, slot) in out.iter_mut().enumerate() {
        let far = SIZE - 1 - i;
        *slot = match dir {
            Direction::Left => Position::new(line, i),
            Direction::Right => Position::new(line, far),
            Direction::Up => Position::new(i, line),
            Direction::Down => Position::new(far, line),
        };
    }
    out
}

/// Slide a line toward index 0, merging equal neighbours once each.
fn slide_line(line: [u32; SIZE]) -> [u32; SIZE] {
    let mut out = [0u32; SIZE];
    let mut write = 0;
    let mut pending: Option<u32> = None;

    for value in line.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(prev) if prev == value => {
                out[write] = prev * 2;
                write += 1;
                pending = None;
            }
            Some(prev) => {
                out[write] = prev;
                write += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(prev) = pending {
        out[write] = prev;
    }
    out
}

impl Board {
    /// Slide and merge every tile toward `dir`, in place.
    ///
    /// Each tile takes part in at most one merge per move. Returns `true` if
    /// the board changed; `false` means the move is illegal here.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        let mut changed = false;
        let cells = self.cells_mut();
        for line in 0..SIZE {
            let positions = line_positions(dir, line);
            let before = positions.map(|p| cells[p.row][p.col]);
            let after = slide_line(before);
            if after != before {
                changed = true;
                for (pos, value) in positions.into_iter().zip(after) {
                    cells[pos.row][pos.col] = value;
                }
            }
        }
        changed
    }

    /// Return the board after moving toward `dir`, or `None` if nothing moves.
    pub fn shifted(&self, dir: Direction) -> Option<Board> {
        let mut child = *self;
        child.apply_move(dir).then_some(child)
    }

    /// Directions that change the board, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.shifted(dir).is_some())
    }

    /// Return `true` if at least one direction changes the board.
    pub fn can_move(&self) -> bool {
        if self.empty_count() > 0 {
            return true;
        }
        // A full board can only move through a merge of adjacent equal tiles.
        let cells = self.rows();
        (0..SIZE).any(|r| {
            (0..SIZE).any(|c| {
                (c + 1 < SIZE && cells[r][c] == cells[r][c + 1])
                    || (r + 1 < SIZE && cells[r][c] == cells[r + 1][c])
            })
        })
    }
}

//! Compact text notation for [`Board`]: four `/`-separated rows of four
//! whitespace-separated tile values, with `0` or `.` for an empty cell.
//!
//! Example: `"2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4"`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, SIZE};
use crate::error::BoardError;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [[0u32; SIZE]; SIZE];
        for (row, row_text) in rows.iter().enumerate() {
            let tokens: Vec<&str> = row_text.split_whitespace().collect();
            if tokens.len() != SIZE {
                return Err(BoardError::WrongColumnCount {
                    row,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                cells[row][col] = match *token {
                    "." => 0,
                    _ => token.parse().map_err(|_| BoardError::InvalidNumber {
                        found: token.to_string(),
                    })?,
                };
            }
        }

        Board::from_rows(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

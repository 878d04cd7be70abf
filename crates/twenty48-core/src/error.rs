//! Error types for board construction, board-text parsing, and direction parsing.

/// Errors from building or parsing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board text does not describe exactly 4 rows.
    #[error("expected 4 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 4 cells.
    #[error("row {row} has {found} cells, expected 4")]
    WrongColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        found: usize,
    },
    /// A cell token is not a non-negative integer.
    #[error("invalid cell value: \"{found}\"")]
    InvalidNumber {
        /// The token that failed to parse.
        found: String,
    },
    /// A tile value is neither zero nor a power of two in `2..=MAX_TILE`.
    #[error("tile {value} at ({row}, {col}) is not a power of two between 2 and 131072")]
    InvalidTile {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The offending value.
        value: u32,
    },
}

/// Error returned when a direction name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: \"{found}\"")]
pub struct DirectionParseError {
    /// The unrecognized input.
    pub found: String,
}

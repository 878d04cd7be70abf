//! Board evaluation: interchangeable heuristics mapping a board to a score.
//!
//! Every heuristic is a pure function of the board. Higher is better for the
//! player. The search calls the configured [`Evaluate`] implementation at
//! depth zero and at positions where the player has no legal move.

pub mod composite;
pub mod gradient;
pub mod snake;

use std::fmt;
use std::str::FromStr;

use twenty48_core::Board;

use crate::error::EngineError;

pub use composite::{composite_score, islands, monotonicity, roughness, smoothness, value_islands};
pub use gradient::gradient_score;
pub use snake::snake_weight_score;

/// A board scoring function.
pub trait Evaluate {
    /// Score `board` from the player's point of view.
    fn evaluate(&self, board: &Board) -> f64;
}

impl<F> Evaluate for F
where
    F: Fn(&Board) -> f64,
{
    #[inline]
    fn evaluate(&self, board: &Board) -> f64 {
        self(board)
    }
}

/// The built-in heuristics, selectable at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Maximum snake-weighted sum over the eight board symmetries.
    #[default]
    SnakeWeight,
    /// Maximum corner-gradient weighted sum over the four corners.
    Gradient,
    /// Smoothness, monotonicity, free space and max tile, linearly combined.
    Composite,
}

impl Heuristic {
    /// All built-in heuristics.
    pub const ALL: [Heuristic; 3] = [Heuristic::SnakeWeight, Heuristic::Gradient, Heuristic::Composite];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::SnakeWeight => "snake",
            Heuristic::Gradient => "gradient",
            Heuristic::Composite => "composite",
        }
    }
}

impl Evaluate for Heuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        match self {
            Heuristic::SnakeWeight => snake_weight_score(board),
            Heuristic::Gradient => gradient_score(board),
            Heuristic::Composite => composite_score(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Heuristic, EngineError> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownHeuristic {
                found: s.to_string(),
            })
    }
}

/// Evaluate `board` with the default heuristic.
pub fn evaluate(board: &Board) -> f64 {
    Heuristic::default().evaluate(board)
}

/// `log2` of a tile value, with empty cells mapping to 0.
#[inline]
pub(crate) fn tile_log2(value: u32) -> f64 {
    if value == 0 {
        0.0
    } else {
        f64::from(value.trailing_zeros())
    }
}

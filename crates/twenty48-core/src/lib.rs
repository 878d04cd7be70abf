//! Core 2048 types: the 4x4 board, move directions, and tile mechanics.

mod board;
mod direction;
mod error;
mod make_move;
mod notation;
mod position;
mod spawn;

pub use board::{Board, MAX_TILE, PrettyBoard, SIZE};
pub use direction::Direction;
pub use error::{BoardError, DirectionParseError};
pub use position::Position;
pub use spawn::{FOUR_PROBABILITY, SPAWN_VALUES};

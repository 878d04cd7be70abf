//! Snake-weight heuristic.
//!
//! Each rank matrix assigns ranks 0..15 along a boustrophedon path whose
//! highest ranks sit in one corner. A cell contributes `tile << rank`, so
//! large tiles near the head of the snake dominate the score. Taking the
//! maximum over all eight orientations makes the score invariant under
//! rotation and reflection of the board.

use twenty48_core::{Board, Position};

/// The eight snake rank matrices: the base snake (head top-left, running
/// along the top row), its transpose, and the horizontal/vertical mirror
/// images of both. Scored in this order; ties keep the first maximum.
#[rustfmt::skip]
pub const SNAKES: [[[u8; 4]; 4]; 8] = [
    [[15, 14, 13, 12],
     [ 8,  9, 10, 11],
     [ 7,  6,  5,  4],
     [ 0,  1,  2,  3]],

    [[15,  8,  7,  0],
     [14,  9,  6,  1],
     [13, 10,  5,  2],
     [12, 11,  4,  3]],

    [[12, 13, 14, 15],
     [11, 10,  9,  8],
     [ 4,  5,  6,  7],
     [ 3,  2,  1,  0]],

    [[ 0,  7,  8, 15],
     [ 1,  6,  9, 14],
     [ 2,  5, 10, 13],
     [ 3,  4, 11, 12]],

    [[ 3,  4, 11, 12],
     [ 2,  5, 10, 13],
     [ 1,  6,  9, 14],
     [ 0,  7,  8, 15]],

    [[ 3,  2,  1,  0],
     [ 4,  5,  6,  7],
     [11, 10,  9,  8],
     [12, 13, 14, 15]],

    [[ 0,  1,  2,  3],
     [ 7,  6,  5,  4],
     [ 8,  9, 10, 11],
     [15, 14, 13, 12]],

    [[12, 11,  4,  3],
     [13, 10,  5,  2],
     [14,  9,  6,  1],
     [15,  8,  7,  0]],
];

/// Weighted sum of `board` under a single rank matrix.
pub fn snake_sum(board: &Board, ranks: &[[u8; 4]; 4]) -> u64 {
    Position::all()
        .map(|pos| u64::from(board.tile(pos)) << ranks[pos.row][pos.col])
        .sum()
}

/// Maximum snake-weighted sum over all eight orientations.
pub fn snake_weight_score(board: &Board) -> f64 {
    SNAKES
        .iter()
        .map(|ranks| snake_sum(board, ranks))
        .max()
        .unwrap_or(0) as f64
}

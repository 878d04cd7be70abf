//! Corner-gradient heuristic.

use twenty48_core::{Board, Position};

/// Weights falling away from the top-left corner. Symmetric about the main
/// diagonal, so the four rotations also cover every reflection.
#[rustfmt::skip]
const BASE: [[f64; 4]; 4] = [
    [4.0, 3.0,  2.0,  1.0 ],
    [3.0, 2.0,  1.0,  0.5 ],
    [2.0, 1.0,  0.5,  0.25],
    [1.0, 0.5,  0.25, 0.0 ],
];

const fn rotate_clockwise(m: [[f64; 4]; 4]) -> [[f64; 4]; 4] {
    let mut out = [[0.0; 4]; 4];
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 4 {
            out[c][3 - r] = m[r][c];
            c += 1;
        }
        r += 1;
    }
    out
}

/// Gradient weights biased toward the top-left, top-right, bottom-right and
/// bottom-left corners, in that order.
pub const GRADIENTS: [[[f64; 4]; 4]; 4] = {
    let top_right = rotate_clockwise(BASE);
    let bottom_right = rotate_clockwise(top_right);
    let bottom_left = rotate_clockwise(bottom_right);
    [BASE, top_right, bottom_right, bottom_left]
};

/// Weighted sum of `board` under one weight matrix.
pub fn gradient_sum(board: &Board, weights: &[[f64; 4]; 4]) -> f64 {
    Position::all()
        .map(|pos| f64::from(board.tile(pos)) * weights[pos.row][pos.col])
        .sum()
}

/// Maximum corner-gradient sum over the four corners.
pub fn gradient_score(board: &Board) -> f64 {
    GRADIENTS
        .iter()
        .map(|weights| gradient_sum(board, weights))
        .fold(f64::NEG_INFINITY, f64::max)
}

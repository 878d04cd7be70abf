//! Composite heuristic: smoothness, monotonicity, free space and max tile.
//!
//! Also provides island counting, which the search can combine with
//! smoothness as a cheap roughness proxy when ranking opponent spawns.

use twenty48_core::{Board, Direction, Position, SIZE};

use crate::eval::tile_log2;

/// Weight of [`smoothness`].
pub const SMOOTH_WEIGHT: f64 = 0.1;
/// Weight of [`monotonicity`].
pub const MONO_WEIGHT: f64 = 1.0;
/// Weight of `log2(empty cells)`.
pub const EMPTY_WEIGHT: f64 = 2.7;
/// Weight of `log2(max tile)`.
pub const MAX_WEIGHT: f64 = 1.0;

/// Free-space term used for a full board, where `log2(0)` is undefined.
pub const FULL_BOARD_PENALTY: f64 = -1.0e6;

/// Linear combination of the four composite terms.
pub fn composite_score(board: &Board) -> f64 {
    let empty = board.empty_count();
    let free_space = if empty == 0 {
        FULL_BOARD_PENALTY
    } else {
        EMPTY_WEIGHT * (empty as f64).log2()
    };

    SMOOTH_WEIGHT * smoothness(board)
        + MONO_WEIGHT * monotonicity(board)
        + free_space
        + MAX_WEIGHT * tile_log2(board.max_tile())
}

/// Negated sum of log-value differences between each tile and the nearest
/// tile to its right and below it.
///
/// Empty cells in between are skipped. A board whose neighbouring tiles are
/// all equal scores 0; rougher boards score lower.
pub fn smoothness(board: &Board) -> f64 {
    let mut smoothness = 0.0;
    for pos in Position::all() {
        let value = board.tile(pos);
        if value == 0 {
            continue;
        }
        let log = tile_log2(value);
        for dir in [Direction::Right, Direction::Down] {
            let (_, next) = board.farthest_position(pos, dir);
            if let Some(next) = next {
                let target = board.tile(next);
                if target != 0 {
                    smoothness -= (log - tile_log2(target)).abs();
                }
            }
        }
    }
    smoothness
}

/// How consistently tile values rise or fall along rows and columns.
///
/// Walks each line over occupied cells, accumulating the (negative) size of
/// every decrease and every increase separately; each axis keeps the better
/// of the two totals. Perfectly monotone boards score 0.
pub fn monotonicity(board: &Board) -> f64 {
    let mut rows = [0.0f64; 2];
    let mut cols = [0.0f64; 2];

    for line in 0..SIZE {
        accumulate_line(|i| board.tile(Position::new(line, i)), &mut rows);
        accumulate_line(|i| board.tile(Position::new(i, line)), &mut cols);
    }

    rows[0].max(rows[1]) + cols[0].max(cols[1])
}

/// `totals[0]` collects decreases, `totals[1]` collects increases.
fn accumulate_line(tile: impl Fn(usize) -> u32, totals: &mut [f64; 2]) {
    let mut current = 0;
    let mut next = 1;
    while next < SIZE {
        while next < SIZE && tile(next) == 0 {
            next += 1;
        }
        if next >= SIZE {
            next -= 1;
        }
        let current_value = tile_log2(tile(current));
        let next_value = tile_log2(tile(next));
        if current_value > next_value {
            totals[0] += next_value - current_value;
        } else if next_value > current_value {
            totals[1] += current_value - next_value;
        }
        current = next;
        next += 1;
    }
}

/// Number of maximal 4-connected regions of equal-valued tiles.
pub fn islands(board: &Board) -> usize {
    let mut marked = [false; Position::COUNT];
    let mut count = 0;
    for pos in Position::all() {
        let value = board.tile(pos);
        if value != 0 && !marked[pos.index()] {
            count += 1;
            flood(board, pos, value, &mut marked);
        }
    }
    count
}

/// Number of maximal 4-connected regions made of tiles equal to `value`.
pub fn value_islands(board: &Board, value: u32) -> usize {
    let mut marked = [false; Position::COUNT];
    let mut count = 0;
    for pos in Position::all() {
        if value != 0 && board.tile(pos) == value && !marked[pos.index()] {
            count += 1;
            flood(board, pos, value, &mut marked);
        }
    }
    count
}

fn flood(board: &Board, start: Position, value: u32, marked: &mut [bool; Position::COUNT]) {
    let mut stack = vec![start];
    marked[start.index()] = true;
    while let Some(pos) = stack.pop() {
        for dir in Direction::ALL {
            if let Some(next) = pos.step(dir)
                && !marked[next.index()]
                && board.tile(next) == value
            {
                marked[next.index()] = true;
                stack.push(next);
            }
        }
    }
}

/// Fragmentation plus roughness: `islands - smoothness`. Higher is worse for
/// the player.
pub fn roughness(board: &Board) -> f64 {
    islands(board) as f64 - smoothness(board)
}

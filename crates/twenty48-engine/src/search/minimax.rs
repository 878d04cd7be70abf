//! Alpha-beta search over alternating player moves and tile spawns.

use twenty48_core::{Board, Direction};

use crate::eval::Evaluate;
use crate::search::control::Deadline;
use crate::search::spawn::SpawnStrategy;

/// Unreachable bound for the root window.
pub const INF: f64 = f64::INFINITY;

/// Result of searching one node.
///
/// `score == None` means the deadline passed during the search. It is
/// forwarded unchanged by every caller and never compared against a bound.
/// A defined score with `direction == None` means the node has no move to
/// report: a leaf, a spawn node, or a player node with no legal direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveScore {
    /// Best direction found at a player node.
    pub direction: Option<Direction>,
    /// Node value, or `None` if the search was aborted.
    pub score: Option<f64>,
    /// Whether the node returned early on an alpha-beta cutoff.
    pub cutoff: bool,
}

impl MoveScore {
    /// The deadline sentinel.
    pub const ABORTED: MoveScore = MoveScore {
        direction: None,
        score: None,
        cutoff: false,
    };

    /// A scored node with no direction.
    #[inline]
    pub const fn leaf(score: f64) -> MoveScore {
        MoveScore {
            direction: None,
            score: Some(score),
            cutoff: false,
        }
    }

    /// Return `true` if this is the deadline sentinel.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.score.is_none()
    }
}

/// Whose turn a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The player picks a direction (maximizing).
    Player,
    /// A tile spawns into an empty cell (minimizing).
    Spawn,
}

/// Search state threaded through the recursion.
pub(crate) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Shared deadline for this decision.
    pub deadline: &'a Deadline,
    /// Leaf evaluation.
    pub evaluator: &'a dyn Evaluate,
    /// Opponent-ply branching.
    pub spawn: SpawnStrategy,
    /// Whether alpha-beta cutoffs are enabled.
    pub pruning: bool,
}

impl SearchContext<'_> {
    /// Window passed to a child: the live bounds, or the full window when
    /// pruning is disabled.
    #[inline]
    fn child_window(&self, alpha: f64, beta: f64) -> (f64, f64) {
        if self.pruning { (alpha, beta) } else { (-INF, INF) }
    }
}

/// Alpha-beta search of `board` to `depth` plies.
pub(crate) fn alpha_beta(
    board: &Board,
    depth: u8,
    alpha: f64,
    beta: f64,
    turn: Turn,
    ctx: &mut SearchContext<'_>,
) -> MoveScore {
    ctx.nodes += 1;

    if ctx.deadline.expired() {
        return MoveScore::ABORTED;
    }

    if depth == 0 {
        return MoveScore::leaf(ctx.evaluator.evaluate(board));
    }

    match turn {
        Turn::Player => player_node(board, depth, alpha, beta, ctx),
        Turn::Spawn => spawn_node(board, depth, alpha, beta, ctx),
    }
}

/// Maximizing node: try each legal direction in [`Direction::ALL`] order.
fn player_node(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    ctx: &mut SearchContext<'_>,
) -> MoveScore {
    let children: Vec<(Direction, Board)> = Direction::ALL
        .into_iter()
        .filter_map(|dir| board.shifted(dir).map(|child| (dir, child)))
        .collect();

    // No legal move: the position is terminal for the player.
    if children.is_empty() {
        return MoveScore::leaf(ctx.evaluator.evaluate(board));
    }

    let mut best: Option<Direction> = None;
    for (dir, child) in children {
        let (a, b) = ctx.child_window(alpha, beta);
        let result = alpha_beta(&child, depth - 1, a, b, Turn::Spawn, ctx);
        let Some(score) = result.score else {
            return MoveScore::ABORTED;
        };

        if score > alpha {
            alpha = score;
            best = Some(dir);
        } else if best.is_none() {
            best = Some(dir);
        }

        if ctx.pruning && alpha >= beta {
            return MoveScore {
                direction: best,
                score: Some(alpha),
                cutoff: true,
            };
        }
    }

    MoveScore {
        direction: best,
        score: Some(alpha),
        cutoff: false,
    }
}

/// Minimizing node: place a 2 or a 4 in an empty cell.
fn spawn_node(
    board: &Board,
    depth: u8,
    alpha: f64,
    mut beta: f64,
    ctx: &mut SearchContext<'_>,
) -> MoveScore {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return MoveScore::leaf(ctx.evaluator.evaluate(board));
    }

    let spawns = ctx.spawn.candidates(board, &empty, ctx.evaluator);
    for (pos, value) in spawns {
        let child = board.with_tile(pos, value);
        let (a, b) = ctx.child_window(alpha, beta);
        let result = alpha_beta(&child, depth - 1, a, b, Turn::Player, ctx);
        let Some(score) = result.score else {
            return MoveScore::ABORTED;
        };

        if score < beta {
            beta = score;
        }

        if ctx.pruning && beta <= alpha {
            return MoveScore {
                direction: None,
                score: Some(beta),
                cutoff: true,
            };
        }
    }

    MoveScore::leaf(beta)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use twenty48_core::{Board, Direction};

    use super::{INF, MoveScore, SearchContext, Turn, alpha_beta};
    use crate::eval::{Evaluate, Heuristic};
    use crate::search::control::Deadline;
    use crate::search::spawn::{SpawnProxy, SpawnStrategy};

    fn run(
        board: &Board,
        depth: u8,
        turn: Turn,
        spawn: SpawnStrategy,
        pruning: bool,
        deadline: &Deadline,
    ) -> (MoveScore, u64) {
        let heuristic = Heuristic::SnakeWeight;
        let mut ctx = SearchContext {
            nodes: 0,
            deadline,
            evaluator: &heuristic,
            spawn,
            pruning,
        };
        let result = alpha_beta(board, depth, -INF, INF, turn, &mut ctx);
        (result, ctx.nodes)
    }

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn depth_zero_is_the_heuristic() {
        let b = board("2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4");
        let deadline = Deadline::none();
        for turn in [Turn::Player, Turn::Spawn] {
            let (result, nodes) = run(&b, 0, turn, SpawnStrategy::Exhaustive, true, &deadline);
            assert_eq!(result, MoveScore::leaf(Heuristic::SnakeWeight.evaluate(&b)));
            assert_eq!(nodes, 1);
        }
    }

    #[test]
    fn expired_deadline_aborts_immediately() {
        let b = board("2 0 0 0/0 0 0 0/0 0 0 0/0 0 0 2");
        let deadline = Deadline::after(Duration::ZERO);
        let (result, nodes) = run(&b, 4, Turn::Player, SpawnStrategy::Exhaustive, true, &deadline);
        assert!(result.is_aborted());
        assert_eq!(result.direction, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn terminal_player_node_scores_without_direction() {
        let stuck = board("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        let deadline = Deadline::none();
        let (result, _) = run(&stuck, 3, Turn::Player, SpawnStrategy::Exhaustive, true, &deadline);
        assert_eq!(result.direction, None);
        assert_eq!(result.score, Some(Heuristic::SnakeWeight.evaluate(&stuck)));
    }

    #[test]
    fn depth_one_picks_best_immediate_move() {
        let b = board("2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4");
        let deadline = Deadline::none();
        let (result, _) = run(&b, 1, Turn::Player, SpawnStrategy::Exhaustive, true, &deadline);
        let best = b
            .legal_moves()
            .map(|dir| (dir, Heuristic::SnakeWeight.evaluate(&b.shifted(dir).unwrap())))
            .fold(None::<(Direction, f64)>, |acc, (dir, score)| match acc {
                Some((_, s)) if s >= score => acc,
                _ => Some((dir, score)),
            });
        let (dir, score) = best.unwrap();
        assert_eq!(result.direction, Some(dir));
        assert_eq!(result.score, Some(score));
    }

    #[test]
    fn spawn_node_takes_the_minimum() {
        // One empty cell: the spawn node's value is the worse of the 2 and 4 spawns.
        let b = board("2 4 8 16/32 64 128 256/2 4 8 16/32 64 128 0");
        let deadline = Deadline::none();
        let (result, _) = run(&b, 1, Turn::Spawn, SpawnStrategy::Exhaustive, false, &deadline);
        let h = Heuristic::SnakeWeight;
        let pos = b.empty_cells()[0];
        let expected = h.evaluate(&b.with_tile(pos, 2)).min(h.evaluate(&b.with_tile(pos, 4)));
        assert_eq!(result.score, Some(expected));
        assert_eq!(result.direction, None);
    }

    #[test]
    fn pruning_preserves_root_value_and_move() {
        let boards = [
            "2 0 0 0/0 0 0 0/0 0 4 0/0 0 0 2",
            "2 4 8 16/0 2 4 8/0 0 2 4/0 0 0 2",
            "128 64 32 16/8 8 4 2/2 0 0 0/0 0 0 0",
            "2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4",
        ];
        let deadline = Deadline::none();
        for text in boards {
            let b = board(text);
            for depth in 1..=3 {
                let (pruned, pruned_nodes) =
                    run(&b, depth, Turn::Player, SpawnStrategy::Exhaustive, true, &deadline);
                let (full, full_nodes) =
                    run(&b, depth, Turn::Player, SpawnStrategy::Exhaustive, false, &deadline);
                assert_eq!(pruned.direction, full.direction, "{text} depth {depth}");
                assert_eq!(pruned.score, full.score, "{text} depth {depth}");
                assert!(pruned_nodes <= full_nodes);
            }
        }
    }

    #[test]
    fn most_dangerous_searches_fewer_nodes() {
        let b = board("2 0 0 0/0 0 0 0/0 0 4 0/0 0 0 2");
        let deadline = Deadline::none();
        let (_, full) = run(&b, 3, Turn::Player, SpawnStrategy::Exhaustive, false, &deadline);
        let (reduced, reduced_nodes) = run(
            &b,
            3,
            Turn::Player,
            SpawnStrategy::MostDangerous(SpawnProxy::Heuristic),
            false,
            &deadline,
        );
        assert!(reduced.direction.is_some());
        assert!(reduced_nodes < full);
    }

    #[test]
    fn cutoff_flag_set_on_beta_cutoff() {
        let b = board("2 4 8 16/0 2 4 8/0 0 2 4/0 0 0 2");
        let heuristic = Heuristic::SnakeWeight;
        let deadline = Deadline::none();
        let mut ctx = SearchContext {
            nodes: 0,
            deadline: &deadline,
            evaluator: &heuristic,
            spawn: SpawnStrategy::Exhaustive,
            pruning: true,
        };
        // A beta below every reachable score forces a cutoff on the first child.
        let result = alpha_beta(&b, 1, -INF, -1.0, Turn::Player, &mut ctx);
        assert!(result.cutoff);
        assert_eq!(result.direction, b.legal_moves().next());
    }
}

//! Adversarial search and the iterative-deepening driver.

pub mod control;
pub mod minimax;
pub mod spawn;

use std::time::Duration;

use tracing::{debug, trace, warn};
use twenty48_core::{Board, Direction};

use crate::config::SearchConfig;
use crate::error::EngineError;
use crate::eval::Evaluate;
use control::Deadline;
use minimax::{INF, SearchContext, Turn, alpha_beta};

/// What a single fixed-depth iteration produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationOutcome {
    /// The iteration completed and found a move.
    Move { direction: Direction, score: f64 },
    /// The iteration completed, but the root has no legal move.
    Terminal { score: f64 },
    /// The deadline passed before the iteration completed.
    Truncated,
}

/// Result of a completed decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Move chosen at the deepest completed depth.
    pub direction: Direction,
    /// Score of that move at that depth.
    pub score: f64,
    /// Deepest completed depth.
    pub depth: u8,
    /// Total nodes visited across all iterations.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Time-bounded iterative-deepening searcher.
pub struct Searcher {
    config: SearchConfig,
    evaluator: Box<dyn Evaluate + Send + Sync>,
}

impl Searcher {
    /// Create a searcher evaluating with `config.heuristic`.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = Box::new(config.heuristic);
        Self { config, evaluator }
    }

    /// Replace the evaluation function, overriding `config.heuristic`.
    pub fn with_evaluator<E>(mut self, evaluator: E) -> Self
    where
        E: Evaluate + Send + Sync + 'static,
    {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for `board` within the configured budget.
    pub fn get_move(&self, board: &Board) -> Result<Direction, EngineError> {
        self.search(board, |_, _, _, _| {}).map(|result| result.direction)
    }

    /// Run iterative deepening until the deadline, the depth cap, or a
    /// terminal root.
    ///
    /// Calls `on_iter(depth, score, nodes, direction)` after each completed
    /// iteration. An iteration cut short by the deadline is discarded; the
    /// move from the deepest completed iteration is returned.
    pub fn search<F>(&self, board: &Board, mut on_iter: F) -> Result<SearchResult, EngineError>
    where
        F: FnMut(u8, f64, u64, Direction),
    {
        let deadline = Deadline::after(self.config.budget);
        let mut ctx = self.context(&deadline);
        let mut best: Option<(Direction, f64, u8)> = None;
        let mut depth = self.config.start_depth.max(1);

        loop {
            if let Some(max) = self.config.max_depth
                && depth > max
            {
                break;
            }

            match iterate(board, depth, &mut ctx) {
                IterationOutcome::Move { direction, score } => {
                    debug!(depth, score, nodes = ctx.nodes, %direction, "iteration complete");
                    best = Some((direction, score, depth));
                    on_iter(depth, score, ctx.nodes, direction);
                }
                IterationOutcome::Terminal { score } => {
                    warn!(board = %board, depth, score, "no legal move");
                    return Err(EngineError::NoLegalMove);
                }
                IterationOutcome::Truncated => {
                    trace!(depth, nodes = ctx.nodes, "iteration truncated by deadline");
                    break;
                }
            }

            if depth == u8::MAX {
                break;
            }
            depth += 1;
        }

        match best {
            Some((direction, score, depth)) => Ok(SearchResult {
                direction,
                score,
                depth,
                nodes: ctx.nodes,
                elapsed: deadline.elapsed(),
            }),
            // The deadline can expire before the root is expanded.
            None if !board.can_move() => {
                warn!(board = %board, "no legal move");
                Err(EngineError::NoLegalMove)
            }
            None => {
                warn!(budget = ?self.config.budget, depth, "no iteration completed");
                Err(EngineError::Timeout {
                    budget: self.config.budget,
                    depth,
                })
            }
        }
    }

    /// Run one search of `board` at exactly `depth` with no deadline.
    ///
    /// A depth of 0 is searched as depth 1: the root must be expanded for
    /// [`IterationOutcome::Terminal`] to mean the player has no legal move.
    pub fn search_depth(&self, board: &Board, depth: u8) -> IterationOutcome {
        let deadline = Deadline::none();
        let mut ctx = self.context(&deadline);
        iterate(board, depth.max(1), &mut ctx)
    }

    fn context<'a>(&'a self, deadline: &'a Deadline) -> SearchContext<'a> {
        SearchContext {
            nodes: 0,
            deadline,
            evaluator: self.evaluator.as_ref(),
            spawn: self.config.spawn,
            pruning: self.config.pruning,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Search the root at `depth` with a full window, player to move.
fn iterate(board: &Board, depth: u8, ctx: &mut SearchContext<'_>) -> IterationOutcome {
    let result = alpha_beta(board, depth, -INF, INF, Turn::Player, ctx);
    match (result.score, result.direction) {
        (None, _) => IterationOutcome::Truncated,
        (Some(score), Some(direction)) => IterationOutcome::Move { direction, score },
        (Some(score), None) => IterationOutcome::Terminal { score },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use twenty48_core::Board;

    use super::{IterationOutcome, Searcher};
    use crate::config::SearchConfig;
    use crate::error::EngineError;
    use crate::eval::Heuristic;

    const SCENARIO: &str = "2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4";

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn depth_zero_expands_the_root() {
        let b = board(SCENARIO);
        for heuristic in Heuristic::ALL {
            let searcher = Searcher::new(SearchConfig::default().with_heuristic(heuristic));
            let outcome = searcher.search_depth(&b, 0);
            assert!(matches!(outcome, IterationOutcome::Move { .. }), "{heuristic}: {outcome:?}");
            assert_eq!(outcome, searcher.search_depth(&b, 1));
        }
    }

    #[test]
    fn scenario_move_is_legal() {
        let b = board(SCENARIO);
        let searcher = Searcher::new(SearchConfig::default().with_budget(Duration::from_millis(200)));
        let dir = searcher.get_move(&b).unwrap();
        let mut clone = b;
        assert!(clone.apply_move(dir), "{dir} is not legal");
    }

    #[test]
    fn fixed_depth_scenario_move_is_legal() {
        let b = board(SCENARIO);
        let searcher = Searcher::default();
        for depth in 2..=4 {
            match searcher.search_depth(&b, depth) {
                IterationOutcome::Move { direction, .. } => assert!(b.shifted(direction).is_some()),
                other => panic!("depth {depth}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn stuck_board_is_no_legal_move() {
        let stuck = board("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        let err = Searcher::default().get_move(&stuck).unwrap_err();
        assert_eq!(err, EngineError::NoLegalMove);
        assert!(err.is_no_move());
    }

    #[test]
    fn stuck_board_with_zero_budget_is_no_legal_move() {
        let stuck = board("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        let searcher = Searcher::new(SearchConfig::default().with_budget(Duration::ZERO));
        assert_eq!(searcher.get_move(&stuck).unwrap_err(), EngineError::NoLegalMove);
    }

    #[test]
    fn stuck_board_fixed_depth_is_terminal() {
        let stuck = board("2 4 2 4/4 2 4 2/2 4 2 4/4 2 4 2");
        assert!(matches!(
            Searcher::default().search_depth(&stuck, 3),
            IterationOutcome::Terminal { .. }
        ));
    }

    #[test]
    fn zero_budget_times_out() {
        let b = board(SCENARIO);
        let searcher = Searcher::new(SearchConfig::default().with_budget(Duration::ZERO));
        let err = searcher.get_move(&b).unwrap_err();
        assert!(matches!(err, EngineError::Timeout { depth: 1, .. }));
        assert!(err.is_no_move());
    }

    #[test]
    fn max_depth_caps_deepening() {
        let b = board("2 0 0 0/0 0 0 0/0 0 4 0/0 0 0 2");
        let searcher = Searcher::new(
            SearchConfig::default()
                .with_budget(Duration::from_secs(30))
                .with_max_depth(3),
        );
        let mut depths = Vec::new();
        let result = searcher
            .search(&b, |depth, _, _, _| depths.push(depth))
            .unwrap();
        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 0);
    }

    #[test]
    fn start_depth_skips_shallow_iterations() {
        let b = board("2 0 0 0/0 0 0 0/0 0 4 0/0 0 0 2");
        let searcher = Searcher::new(
            SearchConfig::default()
                .with_budget(Duration::from_secs(30))
                .with_start_depth(2)
                .with_max_depth(3),
        );
        let mut depths = Vec::new();
        searcher.search(&b, |depth, _, _, _| depths.push(depth)).unwrap();
        assert_eq!(depths, vec![2, 3]);
    }

    #[test]
    fn custom_evaluator_is_used() {
        // Prefer boards whose top-left cell is empty.
        let b = board("2 0 0 0/0 0 0 0/0 0 0 0/0 0 0 0");
        let searcher = Searcher::new(SearchConfig::default().with_max_depth(1))
            .with_evaluator(|b: &Board| if b.rows()[0][0] == 0 { 1.0 } else { 0.0 });
        let dir = searcher.get_move(&b).unwrap();
        assert!(matches!(dir, twenty48_core::Direction::Down | twenty48_core::Direction::Right));
    }
}

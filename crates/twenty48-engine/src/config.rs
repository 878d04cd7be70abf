//! Search configuration.

use std::time::Duration;

use crate::eval::Heuristic;
use crate::search::spawn::SpawnStrategy;

/// Default per-decision time budget.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(980);

/// Knobs for a [`Searcher`](crate::Searcher). Defaults reproduce a
/// snake-weight alpha-beta player with a 980 ms budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Wall-clock budget for one decision.
    pub budget: Duration,
    /// Board evaluation used at the search horizon.
    pub heuristic: Heuristic,
    /// How the opponent ply branches over spawns.
    pub spawn: SpawnStrategy,
    /// Alpha-beta cutoffs. Disabling gives a plain minimax over the same tree.
    pub pruning: bool,
    /// First iterative-deepening depth (clamped to at least 1).
    pub start_depth: u8,
    /// Stop deepening after this depth, if set.
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            heuristic: Heuristic::SnakeWeight,
            spawn: SpawnStrategy::Exhaustive,
            pruning: true,
            start_depth: 1,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnStrategy) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_start_depth(mut self, depth: u8) -> Self {
        self.start_depth = depth.max(1);
        self
    }

    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

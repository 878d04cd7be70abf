//! Engine errors.

use std::time::Duration;

/// Errors surfaced by the engine to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No direction changes the board: the game is over.
    #[error("no move available: no direction changes the board")]
    NoLegalMove,

    /// The time budget ran out before the first iteration completed.
    #[error("no move available: budget of {budget:?} did not complete depth {depth}")]
    Timeout {
        /// The per-decision budget that was exhausted.
        budget: Duration,
        /// The depth whose iteration was cut short.
        depth: u8,
    },

    /// A heuristic name was not recognized.
    #[error("unknown heuristic: \"{found}\"")]
    UnknownHeuristic {
        /// The unrecognized name.
        found: String,
    },

    /// A spawn strategy name was not recognized.
    #[error("unknown spawn strategy: \"{found}\"")]
    UnknownSpawnStrategy {
        /// The unrecognized name.
        found: String,
    },
}

impl EngineError {
    /// Return `true` for the "no move available" failures of a decision.
    pub fn is_no_move(&self) -> bool {
        matches!(self, EngineError::NoLegalMove | EngineError::Timeout { .. })
    }
}

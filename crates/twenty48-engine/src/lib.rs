//! Move selection for 2048: heuristics, adversarial search, and
//! time-bounded iterative deepening.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::{DEFAULT_BUDGET, SearchConfig};
pub use error::EngineError;
pub use eval::{Evaluate, Heuristic, evaluate};
pub use search::control::Deadline;
pub use search::minimax::MoveScore;
pub use search::spawn::{SpawnProxy, SpawnStrategy};
pub use search::{IterationOutcome, SearchResult, Searcher};

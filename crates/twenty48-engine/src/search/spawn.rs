//! Opponent-ply branching: which spawns the search examines.

use std::fmt;
use std::str::FromStr;

use twenty48_core::{Board, Position, SPAWN_VALUES};

use crate::error::EngineError;
use crate::eval::{Evaluate, roughness};

/// How the opponent ply chooses the spawns it recurses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpawnStrategy {
    /// Every empty cell with a 2, then every empty cell with a 4.
    #[default]
    Exhaustive,
    /// Only the spawn(s) a cheap proxy rates worst for the player, ties
    /// included. Trades exactness for a smaller branching factor.
    MostDangerous(SpawnProxy),
}

/// Cheap one-step evaluation used to rank spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpawnProxy {
    /// The search heuristic itself, applied to the board after the spawn.
    /// The lowest score is the most dangerous.
    #[default]
    Heuristic,
    /// `islands - smoothness` of the board after the spawn. The highest
    /// value is the most dangerous.
    Roughness,
}

impl SpawnStrategy {
    /// Spawns to recurse into, as `(cell, value)` pairs.
    ///
    /// `empty` must be the board's empty cells in row-major order. The
    /// result is ordered by value, then row-major cell.
    pub fn candidates(
        self,
        board: &Board,
        empty: &[Position],
        evaluator: &dyn Evaluate,
    ) -> Vec<(Position, u32)> {
        let all = SPAWN_VALUES
            .into_iter()
            .flat_map(|value| empty.iter().map(move |&pos| (pos, value)));

        match self {
            SpawnStrategy::Exhaustive => all.collect(),
            SpawnStrategy::MostDangerous(proxy) => {
                // Probe on a private copy; every probe is reverted before the next.
                let mut scratch = *board;
                let scored: Vec<((Position, u32), f64)> = all
                    .map(|(pos, value)| {
                        scratch.insert_tile(pos, value);
                        let danger = proxy.danger(&scratch, evaluator);
                        scratch.insert_tile(pos, 0);
                        ((pos, value), danger)
                    })
                    .collect();

                let worst = scored
                    .iter()
                    .map(|&(_, danger)| danger)
                    .fold(f64::NEG_INFINITY, f64::max);

                scored
                    .into_iter()
                    .filter(|&(_, danger)| danger == worst)
                    .map(|(spawn, _)| spawn)
                    .collect()
            }
        }
    }
}

impl SpawnProxy {
    /// How bad `board` is for the player; larger is more dangerous.
    fn danger(self, board: &Board, evaluator: &dyn Evaluate) -> f64 {
        match self {
            SpawnProxy::Heuristic => -evaluator.evaluate(board),
            SpawnProxy::Roughness => roughness(board),
        }
    }
}

impl fmt::Display for SpawnStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnStrategy::Exhaustive => f.write_str("exhaustive"),
            SpawnStrategy::MostDangerous(SpawnProxy::Heuristic) => f.write_str("dangerous"),
            SpawnStrategy::MostDangerous(SpawnProxy::Roughness) => f.write_str("rough"),
        }
    }
}

impl FromStr for SpawnStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<SpawnStrategy, EngineError> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(SpawnStrategy::Exhaustive),
            "dangerous" => Ok(SpawnStrategy::MostDangerous(SpawnProxy::Heuristic)),
            "rough" => Ok(SpawnStrategy::MostDangerous(SpawnProxy::Roughness)),
            _ => Err(EngineError::UnknownSpawnStrategy {
                found: s.to_string(),
            }),
        }
    }
}

use std::time::Duration;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use twenty48_core::Board;
use twenty48_engine::{Heuristic, SearchConfig, Searcher};

const DEFAULT_BOARD: &str = "2 8 16 2/4 64 32 4/8 32 128 1024/2 8 4 4";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("play") => play(&args[1..]),
        _ => decide(&args),
    }
}

fn parse_budget(arg: Option<&String>) -> Result<SearchConfig> {
    let config = SearchConfig::default();
    match arg {
        Some(ms) => {
            let ms: u64 = ms.parse().with_context(|| format!("invalid budget: {ms}"))?;
            Ok(config.with_budget(Duration::from_millis(ms)))
        }
        None => Ok(config),
    }
}

/// `twenty48 [BOARD] [BUDGET_MS] [HEURISTIC]`
fn decide(args: &[String]) -> Result<()> {
    let text = args.first().map_or(DEFAULT_BOARD, String::as_str);
    let board: Board = text.parse().context("invalid board")?;
    let mut config = parse_budget(args.get(1))?;
    if let Some(name) = args.get(2) {
        config = config.with_heuristic(name.parse::<Heuristic>()?);
    }

    info!(heuristic = %config.heuristic, budget_ms = config.budget.as_millis() as u64, "deciding");
    println!("{}", board.pretty());

    let result = Searcher::new(config).search(&board, |depth, score, nodes, dir| {
        info!(depth, score, nodes, %dir, "iteration");
    })?;
    println!(
        "move {} (depth {}, score {:.2}, nodes {}, {} ms)",
        result.direction,
        result.depth,
        result.score,
        result.nodes,
        result.elapsed.as_millis()
    );
    Ok(())
}

/// `twenty48 play [SEED] [BUDGET_MS]`
fn play(args: &[String]) -> Result<()> {
    let seed: u64 = match args.first() {
        Some(s) => s.parse().with_context(|| format!("invalid seed: {s}"))?,
        None => 0,
    };
    let searcher = Searcher::new(parse_budget(args.get(1))?);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);

    info!(seed, "self-play starting");
    let mut turns = 0u32;
    loop {
        let dir = match searcher.get_move(&board) {
            Ok(dir) => dir,
            Err(e) if e.is_no_move() => break,
            Err(e) => return Err(e.into()),
        };
        if !board.apply_move(dir) {
            bail!("engine chose illegal move {dir} on {board}");
        }
        board = board.with_random_tile(&mut rng);
        turns += 1;
        if turns % 50 == 0 {
            info!(turns, max_tile = board.max_tile(), "progress");
        }
    }

    info!(turns, max_tile = board.max_tile(), "game over");
    println!("{}", board.pretty());
    println!("turns {turns}, max tile {}", board.max_tile());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_parses() {
        let board: Board = DEFAULT_BOARD.parse().unwrap();
        assert_eq!(board.max_tile(), 1024);
    }

    #[test]
    fn budget_argument_sets_duration() {
        let config = parse_budget(Some(&"250".to_string())).unwrap();
        assert_eq!(config.budget, Duration::from_millis(250));
        assert!(parse_budget(Some(&"fast".to_string())).is_err());
    }
}

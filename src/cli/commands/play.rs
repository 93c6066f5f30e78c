//! Play command - run a self-playing crossing-game match

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::output;
use crate::crossing::{
    CrossingGame, GameState, MatchReport, MovePolicy, NullObserver, Player, RandomPolicy,
    SearchPolicy, Termination, TurnObserver, TurnRecord, driver,
};
use crate::export::results_csv;

#[derive(Parser, Debug)]
#[command(about = "Play a crossing-game match between two automated players")]
pub struct PlayArgs {
    /// Board size n (prompted interactively when omitted)
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Search depth for P1
    #[arg(long, default_value_t = 4)]
    pub depth_p1: u32,

    /// Search depth for P2
    #[arg(long, default_value_t = 6)]
    pub depth_p2: u32,

    /// P2 policy (`search` or `random`)
    #[arg(long, short = 'o', default_value = "search")]
    pub opponent: String,

    /// Random seed for the random policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV file the timing results are appended to
    #[arg(long, default_value = "results.csv")]
    pub results: PathBuf,

    /// Export the full match report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Suppress per-turn board printing
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Observer printing the per-turn console report
struct ConsoleObserver;

impl TurnObserver for ConsoleObserver {
    fn on_turn(&mut self, game: &CrossingGame, record: &TurnRecord, state_after: &GameState) {
        println!("\nTurn {}: {}", record.turn, record.player);
        println!("Chosen action: {}", record.action);
        println!("{}", game.render(state_after));
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let n = match args.size {
        Some(n) if n > 0 => n,
        Some(n) => {
            return Err(crate::Error::InvalidBoardSize {
                input: n.to_string(),
            }
            .into());
        }
        None => prompt_board_size()?,
    };

    let game = CrossingGame::new(n);
    if !args.quiet {
        println!("Initial state:");
        println!("{}", game.render(&game.initial_state()));
    }

    let mut p1: Box<dyn MovePolicy> = Box::new(SearchPolicy::new(args.depth_p1));
    let mut p2: Box<dyn MovePolicy> = match args.opponent.to_lowercase().as_str() {
        "search" => Box::new(SearchPolicy::new(args.depth_p2)),
        "random" => Box::new(RandomPolicy::seeded(args.seed.unwrap_or(0))),
        other => anyhow::bail!("unknown opponent '{other}' (expected 'search' or 'random')"),
    };

    let report = if args.quiet {
        driver::play_match(&game, p1.as_mut(), p2.as_mut(), &mut NullObserver)
    } else {
        driver::play_match(&game, p1.as_mut(), p2.as_mut(), &mut ConsoleObserver)
    };

    print_summary(&report);

    if matches!(report.termination, Termination::Aborted { .. }) {
        // An aborted match is reported but not persisted.
        return Ok(());
    }

    results_csv::append_match(&args.results, &report)?;
    println!("Results appended to {}", args.results.display());

    if let Some(path) = &args.export {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create report file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, &report).map_err(crate::Error::from)?;
        println!("Report exported to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &MatchReport) {
    output::print_section("Match finished");
    match &report.termination {
        Termination::Winner(player) => output::print_kv("Winner", &player.to_string()),
        Termination::Stalemate => output::print_kv("Winner", "none (stalemate)"),
        Termination::Aborted { reason } => output::print_kv("Aborted", reason),
    }
    output::print_kv("Turns", &report.turns.len().to_string());
    output::print_kv("Total time", &format!("{:.4} s", report.total_seconds));

    for player in [Player::P1, Player::P2] {
        let summary = report.summary(player);
        output::print_kv(
            &format!("{player} ({}, d={})", summary.policy, summary.depth),
            &format!(
                "{} moves, avg {:.4} s",
                summary.moves, summary.average_move_seconds
            ),
        );
    }
}

fn prompt_board_size() -> crate::Result<usize> {
    print!("Board size n (default 3): ");
    io::stdout().flush().map_err(|source| crate::Error::Io {
        operation: "flush prompt".to_string(),
        source,
    })?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|source| crate::Error::Io {
            operation: "read board size".to_string(),
            source,
        })?;
    parse_board_size(&line)
}

/// Blank input defaults to 3; anything else must be a positive integer
fn parse_board_size(input: &str) -> crate::Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(3);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| crate::Error::InvalidBoardSize {
            input: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn blank_size_defaults_to_three() {
        assert_eq!(parse_board_size("\n").unwrap(), 3);
        assert_eq!(parse_board_size("").unwrap(), 3);
    }

    #[test]
    fn explicit_size_is_parsed() {
        assert_eq!(parse_board_size(" 5 \n").unwrap(), 5);
    }

    #[test]
    fn non_integer_size_is_fatal() {
        let err = parse_board_size("two").unwrap_err();
        assert!(matches!(err, Error::InvalidBoardSize { .. }));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(parse_board_size("0").is_err());
    }
}

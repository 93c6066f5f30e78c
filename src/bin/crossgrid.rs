//! crossgrid CLI - grid-completion puzzle solver and crossing-game toolkit
//!
//! This CLI provides a unified interface for:
//! - Solving grid-completion puzzles read from standard input
//! - Playing automated crossing-game matches with configurable lookahead
//! - Persisting match timing results for later analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crossgrid")]
#[command(version, about = "Grid puzzle solver and crossing game toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a grid-completion puzzle from standard input
    Solve(crossgrid::cli::commands::solve::SolveArgs),

    /// Play an automated crossing-game match
    Play(crossgrid::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => crossgrid::cli::commands::solve::execute(args),
        Commands::Play(args) => crossgrid::cli::commands::play::execute(args),
    }
}

//! Solve command - complete a puzzle grid read from standard input

use std::io::{self, BufRead};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::cli::output;
use crate::puzzle::{Grid, backtrack, csp};

/// Which solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Arc-consistency-driven CSP solver (row-0 count target)
    Csp,
    /// Pruned depth-first completion (fixed n/2 target)
    Backtrack,
}

#[derive(Parser, Debug)]
#[command(about = "Solve a grid-completion puzzle read from standard input")]
pub struct SolveArgs {
    /// Solver algorithm
    #[arg(long, short = 'a', value_enum, default_value = "csp")]
    pub algorithm: Algorithm,

    /// Show a spinner while solving
    #[arg(long)]
    pub progress: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let grid = read_grid(io::stdin().lock())?;
    grid.validate_initial()?;

    let spinner = args.progress.then(|| output::create_spinner("Solving"));
    let solution = match args.algorithm {
        Algorithm::Csp => csp::solve(&grid),
        Algorithm::Backtrack => backtrack::solve(&grid),
    };
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match solution {
        Some(completed) => println!("{completed}"),
        None => println!("no solution"),
    }
    Ok(())
}

/// Read grid rows until a blank line or end of input
fn read_grid(reader: impl BufRead) -> crate::Result<Grid> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| crate::Error::Io {
            operation: "read puzzle input".to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            break;
        }
        rows.push(line);
    }
    Grid::from_lines(rows)
}

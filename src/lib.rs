//! Grid-completion puzzle solver and adversarial crossing-game toolkit
//!
//! This crate provides:
//! - A tic-tac-logic style grid-completion puzzle modeled as a CSP and solved
//!   with arc-consistency-driven backtracking, plus a simpler pruned
//!   depth-first variant
//! - A two-player crossing race game with a depth-limited alpha-beta engine
//! - A self-playing match driver with per-turn reporting and timing telemetry
//! - CSV persistence of match results for later analysis

pub mod cli;
pub mod crossing;
pub mod error;
pub mod export;
pub mod puzzle;

pub use crossing::{
    Action, CrossingGame, GameState, MatchReport, MovePolicy, Player, Pos, RandomPolicy,
    SearchPolicy, Termination,
};
pub use error::{Axis, Error, Result};
pub use puzzle::{Cell, Grid};

//! CLI infrastructure for the crossgrid toolkit
//!
//! This module provides the command-line interface for solving
//! grid-completion puzzles and playing crossing-game matches.

pub mod commands;
pub mod output;

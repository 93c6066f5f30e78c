//! Error types for the crossgrid crate

use thiserror::Error;

/// Which direction of the grid a structural failure was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Main error type for the crossgrid crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board must be square: row {row} has {got} cells, expected {expected}")]
    NonSquareBoard {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("board has no rows")]
    EmptyBoard,

    #[error(
        "invalid character '{character}' at row {row}, column {column} (only 'x', 'o', '_' are allowed)"
    )]
    InvalidCellCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("{axis} {index} already contains three consecutive identical symbols")]
    ConsecutiveRun { axis: Axis, index: usize },

    #[error("board is already solved")]
    AlreadySolved,

    #[error("invalid board size '{input}' (expected a positive integer)")]
    InvalidBoardSize { input: String },

    #[error("search failed: {context}")]
    SearchFailure { context: String },

    #[error("illegal action {action}: no such piece for the player to move")]
    IllegalAction { action: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

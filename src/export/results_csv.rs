//! Append-only CSV store for match timing results
//!
//! One row per player per completed match: board size, the depth that player
//! searched at, that player's average move time, and the shared total game
//! time. The header is written only when the file does not already exist.

use std::fs::OpenOptions;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crossing::{MatchReport, Player};
use crate::error::{Error, Result};

/// A single row in the result store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub n: usize,
    pub d: u32,
    pub average_move_time_seconds: f64,
    pub total_game_time_seconds: f64,
}

impl ResultRecord {
    /// Build the row for one player of a finished match
    pub fn for_player(report: &MatchReport, player: Player) -> Self {
        let summary = report.summary(player);
        ResultRecord {
            n: report.board_size,
            d: summary.depth,
            average_move_time_seconds: summary.average_move_seconds,
            total_game_time_seconds: report.total_seconds,
        }
    }
}

/// Append one row per player to the result store at `path`.
///
/// Creates the file (with a header row) when it does not exist; otherwise
/// appends data rows only.
pub fn append_match(path: &Path, report: &MatchReport) -> Result<()> {
    let records = [
        ResultRecord::for_player(report, Player::P1),
        ResultRecord::for_player(report, Player::P2),
    ];
    append_records(path, &records)
}

/// Append records to the store at `path`, writing the header only when the
/// file is new.
pub fn append_records(path: &Path, records: &[ResultRecord]) -> Result<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::Io {
            operation: format!("open result store {}", path.display()),
            source,
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush result store {}", path.display()),
        source,
    })?;
    Ok(())
}

/// Read every record from the store; used by tests and analysis scripts
pub fn read_records(path: &Path) -> Result<Vec<ResultRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

//! Persistence of match results for later analysis

pub mod results_csv;

pub use results_csv::{ResultRecord, append_match, append_records, read_records};

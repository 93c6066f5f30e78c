//! Pre-solve validation of puzzle input

use super::board::Grid;
use crate::error::{Error, Result};

impl Grid {
    /// Validate a freshly parsed grid before any solver is constructed.
    ///
    /// Shape and alphabet failures are already rejected by
    /// [`Grid::from_lines`]; this check covers the remaining preconditions:
    ///
    /// - a grid that is complete and already satisfies the goal predicate is
    ///   rejected with [`Error::AlreadySolved`]
    /// - a grid with an existing monochrome triple in any row or column is
    ///   rejected with [`Error::ConsecutiveRun`]
    ///
    /// The two rejections are mutually exclusive (a goal grid has no runs)
    /// and exhaustive: a grid passing both is always acceptable solver input.
    /// Validation borrows the grid immutably and never alters it.
    pub fn validate_initial(&self) -> Result<()> {
        if self.is_complete() && self.is_goal() {
            return Err(Error::AlreadySolved);
        }

        if let Some((axis, index)) = self.first_run() {
            return Err(Error::ConsecutiveRun { axis, index });
        }

        Ok(())
    }
}

//! Pruned depth-first completion, the simpler alternative to the CSP solver
//!
//! Fills empty cells in row-major order, trying `x` then `o`, and abandons
//! any partial grid that forms a monochrome triple or drifts outside the
//! balanced relaxation. The goal here is the fixed n/2 split per row and
//! column (unsatisfiable for odd n, which simply yields no solution).

use super::board::{Cell, Grid};

/// Complete the grid by pruned backtracking.
///
/// Same contract as [`crate::puzzle::csp::solve`]: the completed grid, or
/// `None` when no completion meets the goal.
pub fn solve(grid: &Grid) -> Option<Grid> {
    let slack = grid.size() % 2;
    complete(grid, slack)
}

fn complete(grid: &Grid, slack: usize) -> Option<Grid> {
    let Some(&(i, j)) = grid.empty_cells().first() else {
        return grid.is_goal_exact_half().then(|| grid.clone());
    };

    for value in [Cell::X, Cell::O] {
        let next = grid.with_cell(i, j, value);
        if next.is_structurally_valid()
            && next.is_balanced(slack)
            && let Some(solution) = complete(&next, slack)
        {
            return Some(solution);
        }
    }
    None
}

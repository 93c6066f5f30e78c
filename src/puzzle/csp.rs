//! Constraint-satisfaction model and solver for the completion puzzle
//!
//! Variables are cell coordinates, domains are the symbols a cell may still
//! take, and constraints are uniform (scope, predicate) pairs: short
//! monochrome-triple constraints over every length-3 row/column window plus a
//! single global constraint requiring equal `o` counts across all rows and
//! columns. The solver interleaves generalized arc consistency with
//! backtracking search over cloned domain tables, so no branch ever observes
//! another branch's pruning.

use std::collections::VecDeque;

use super::board::{Cell, Grid};

/// Cell coordinate used as a CSP variable
type Var = (usize, usize);

/// Domain table indexed by row-major variable index
type Domains = Vec<Vec<Cell>>;

/// A constraint over a set of variables.
///
/// The predicate is evaluated against a full assignment of the scope, in
/// scope order. Constraints whose scope is small participate in propagation;
/// the global count constraint is vacuous on partial assignments and is
/// checked only once every variable is assigned.
struct Constraint {
    scope: Vec<Var>,
    predicate: Box<dyn Fn(&[Cell]) -> bool>,
    propagates: bool,
}

struct PuzzleCsp {
    n: usize,
    constraints: Vec<Constraint>,
    /// For each variable, the propagating constraints that mention it
    attached: Vec<Vec<usize>>,
}

/// Solve the grid-completion puzzle as a CSP.
///
/// Returns the completed grid, or `None` when no satisfying assignment
/// exists. An unsatisfiable but well-formed puzzle is a normal negative
/// outcome, never an error.
pub fn solve(grid: &Grid) -> Option<Grid> {
    let csp = PuzzleCsp::new(grid);
    let mut domains = csp.initial_domains(grid);

    if !csp.propagate(&mut domains, 0..csp.constraints.len()) {
        return None;
    }
    csp.search(domains)
}

impl PuzzleCsp {
    fn new(grid: &Grid) -> Self {
        let n = grid.size();
        let mut constraints = Vec::new();

        let not_monochrome =
            || -> Box<dyn Fn(&[Cell]) -> bool> { Box::new(|w| !(w[0] == w[1] && w[1] == w[2])) };

        // Length-3 windows along rows
        for i in 0..n {
            for j in 0..n.saturating_sub(2) {
                constraints.push(Constraint {
                    scope: vec![(i, j), (i, j + 1), (i, j + 2)],
                    predicate: not_monochrome(),
                    propagates: true,
                });
            }
        }

        // Length-3 windows along columns
        for j in 0..n {
            for i in 0..n.saturating_sub(2) {
                constraints.push(Constraint {
                    scope: vec![(i, j), (i + 1, j), (i + 2, j)],
                    predicate: not_monochrome(),
                    propagates: true,
                });
            }
        }

        // Global constraint: every fully assigned row and column carries the
        // same number of `o` symbols.
        let mut full_scope = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                full_scope.push((i, j));
            }
        }
        constraints.push(Constraint {
            scope: full_scope,
            predicate: Box::new(move |vals| {
                let row_count = |i: usize| {
                    vals[i * n..(i + 1) * n]
                        .iter()
                        .filter(|&&c| c == Cell::O)
                        .count()
                };
                let col_count =
                    |j: usize| (0..n).filter(|&i| vals[i * n + j] == Cell::O).count();

                let target = row_count(0);
                (0..n).all(|i| row_count(i) == target) && (0..n).all(|j| col_count(j) == target)
            }),
            propagates: false,
        });

        let mut attached = vec![Vec::new(); n * n];
        for (ci, constraint) in constraints.iter().enumerate() {
            if !constraint.propagates {
                continue;
            }
            for &(i, j) in &constraint.scope {
                attached[i * n + j].push(ci);
            }
        }

        PuzzleCsp {
            n,
            constraints,
            attached,
        }
    }

    fn initial_domains(&self, grid: &Grid) -> Domains {
        let mut domains = Vec::with_capacity(self.n * self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                domains.push(match grid.get(i, j) {
                    Cell::Empty => vec![Cell::X, Cell::O],
                    fixed => vec![fixed],
                });
            }
        }
        domains
    }

    fn index(&self, var: Var) -> usize {
        var.0 * self.n + var.1
    }

    /// Generalized arc consistency over the seeded constraints.
    ///
    /// Removes every domain value without support and re-examines constraints
    /// attached to any variable whose domain shrank, until a fixed point.
    /// Returns `false` as soon as a domain empties.
    fn propagate(&self, domains: &mut Domains, seed: impl IntoIterator<Item = usize>) -> bool {
        let mut queue: VecDeque<usize> = seed
            .into_iter()
            .filter(|&ci| self.constraints[ci].propagates)
            .collect();
        let mut queued = vec![false; self.constraints.len()];
        for &ci in &queue {
            queued[ci] = true;
        }

        while let Some(ci) = queue.pop_front() {
            queued[ci] = false;
            let constraint = &self.constraints[ci];

            for (pos, &var) in constraint.scope.iter().enumerate() {
                let vi = self.index(var);
                let before = domains[vi].len();

                let values = domains[vi].clone();
                let supported: Vec<Cell> = values
                    .into_iter()
                    .filter(|&value| self.has_support(constraint, pos, value, domains))
                    .collect();

                if supported.is_empty() {
                    return false;
                }

                if supported.len() < before {
                    domains[vi] = supported;
                    for &neighbor in &self.attached[vi] {
                        if !queued[neighbor] {
                            queued[neighbor] = true;
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }
        true
    }

    /// Check whether `value` at scope position `pos` can be extended to a
    /// full assignment of the constraint's scope satisfying the predicate.
    fn has_support(
        &self,
        constraint: &Constraint,
        pos: usize,
        value: Cell,
        domains: &Domains,
    ) -> bool {
        let mut assignment = vec![Cell::Empty; constraint.scope.len()];
        assignment[pos] = value;
        self.extend_support(constraint, 0, pos, &mut assignment, domains)
    }

    fn extend_support(
        &self,
        constraint: &Constraint,
        idx: usize,
        fixed: usize,
        assignment: &mut [Cell],
        domains: &Domains,
    ) -> bool {
        if idx == constraint.scope.len() {
            return (constraint.predicate)(assignment);
        }
        if idx == fixed {
            return self.extend_support(constraint, idx + 1, fixed, assignment, domains);
        }

        let vi = self.index(constraint.scope[idx]);
        for value_idx in 0..domains[vi].len() {
            assignment[idx] = domains[vi][value_idx];
            if self.extend_support(constraint, idx + 1, fixed, assignment, domains) {
                return true;
            }
        }
        false
    }

    /// Backtracking search over domain tables.
    ///
    /// Branches on the unassigned variable with the fewest remaining values,
    /// assigning candidates in domain order. Each branch works on its own
    /// cloned table.
    fn search(&self, domains: Domains) -> Option<Grid> {
        let branch_var = (0..domains.len())
            .filter(|&vi| domains[vi].len() > 1)
            .min_by_key(|&vi| domains[vi].len());

        let Some(vi) = branch_var else {
            // Every domain is a singleton: check the full assignment against
            // every constraint, including the deferred global one.
            return self.check_complete(&domains);
        };

        for value_idx in 0..domains[vi].len() {
            let value = domains[vi][value_idx];
            let mut next = domains.clone();
            next[vi] = vec![value];

            if self.propagate(&mut next, self.attached[vi].iter().copied())
                && let Some(solution) = self.search(next)
            {
                return Some(solution);
            }
        }
        None
    }

    fn check_complete(&self, domains: &Domains) -> Option<Grid> {
        for constraint in &self.constraints {
            let assignment: Vec<Cell> = constraint
                .scope
                .iter()
                .map(|&var| domains[self.index(var)][0])
                .collect();
            if !(constraint.predicate)(&assignment) {
                return None;
            }
        }

        let mut grid = Grid::empty(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                grid = grid.with_cell(i, j, domains[self.index((i, j))][0]);
            }
        }
        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_lines(lines).expect("test grid should parse")
    }

    #[test]
    fn solves_partial_grid() {
        let solution = solve(&grid(&["o__", "_x_", "__o"])).expect("solvable puzzle");
        assert!(solution.is_goal());
        assert_eq!(solution.get(0, 0), Cell::O);
        assert_eq!(solution.get(1, 1), Cell::X);
        assert_eq!(solution.get(2, 2), Cell::O);
    }

    #[test]
    fn reports_no_solution() {
        // Row 0 fixes the target at zero `o`s, but row 1 already holds one.
        assert!(solve(&grid(&["xx", "o_"])).is_none());
    }

    #[test]
    fn prefilled_cells_are_never_overwritten() {
        let original = grid(&["_x__", "__o_", "____", "_x__"]);
        if let Some(solution) = solve(&original) {
            for i in 0..4 {
                for j in 0..4 {
                    let given = original.get(i, j);
                    if given != Cell::Empty {
                        assert_eq!(solution.get(i, j), given);
                    }
                }
            }
        }
    }

    #[test]
    fn propagation_prunes_forced_triples() {
        // `xx_` forces the third cell of the window to `o` before any search.
        let g = grid(&["xx_", "___", "___"]);
        let csp = PuzzleCsp::new(&g);
        let mut domains = csp.initial_domains(&g);
        assert!(csp.propagate(&mut domains, 0..csp.constraints.len()));
        assert_eq!(domains[csp.index((0, 2))], vec![Cell::O]);
    }

    #[test]
    fn solver_is_deterministic() {
        let g = grid(&["____", "_x__", "__o_", "____"]);
        assert_eq!(solve(&g), solve(&g));
    }
}

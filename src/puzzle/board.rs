//! Grid representation and basic operations for the completion puzzle

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, Error};

/// A cell on the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::X),
            'o' | 'O' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A square puzzle grid stored row-major
///
/// Squareness is established at construction and holds for the lifetime of
/// the value; all transitions return fresh grids and never mutate in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    n: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parse a grid from one text line per row.
    ///
    /// Each line uses `x`, `o`, `_`. Leading/trailing whitespace on a line is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBoard`] when no rows are given,
    /// [`Error::NonSquareBoard`] when any row's length differs from the row
    /// count, and [`Error::InvalidCellCharacter`] for characters outside the
    /// alphabet.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();

        if rows.is_empty() {
            return Err(Error::EmptyBoard);
        }

        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);

        for (i, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != n {
                return Err(Error::NonSquareBoard {
                    row: i,
                    expected: n,
                    got: chars.len(),
                });
            }
            for (j, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(Error::InvalidCellCharacter {
                    character: c,
                    row: i,
                    column: j,
                })?;
                cells.push(cell);
            }
        }

        Ok(Grid { n, cells })
    }

    /// Create an empty n×n grid
    pub fn empty(n: usize) -> Self {
        Grid {
            n,
            cells: vec![Cell::Empty; n * n],
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.n
    }

    /// Get the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.n + col]
    }

    /// Return a new grid with one cell replaced
    #[must_use = "with_cell returns a new grid; the original is unchanged"]
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        next.cells[row * self.n + col] = cell;
        next
    }

    /// Iterate over the cells of one row
    pub fn row(&self, i: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.n).map(move |j| self.get(i, j))
    }

    /// Iterate over the cells of one column
    pub fn column(&self, j: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.n).map(move |i| self.get(i, j))
    }

    /// Count occurrences of a symbol in a row
    pub fn count_in_row(&self, i: usize, cell: Cell) -> usize {
        self.row(i).filter(|&c| c == cell).count()
    }

    /// Count occurrences of a symbol in a column
    pub fn count_in_column(&self, j: usize, cell: Cell) -> usize {
        self.column(j).filter(|&c| c == cell).count()
    }

    /// Coordinates of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for i in 0..self.n {
            for j in 0..self.n {
                if self.get(i, j) == Cell::Empty {
                    empties.push((i, j));
                }
            }
        }
        empties
    }

    /// Check whether every cell is assigned
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    fn line_has_run(line: &[Cell]) -> bool {
        line.windows(3)
            .any(|w| w[0] != Cell::Empty && w[0] == w[1] && w[1] == w[2])
    }

    /// Locate the first row or column containing three consecutive identical
    /// symbols, rows before columns.
    pub fn first_run(&self) -> Option<(Axis, usize)> {
        for i in 0..self.n {
            let row: Vec<Cell> = self.row(i).collect();
            if Self::line_has_run(&row) {
                return Some((Axis::Row, i));
            }
        }
        for j in 0..self.n {
            let col: Vec<Cell> = self.column(j).collect();
            if Self::line_has_run(&col) {
                return Some((Axis::Column, j));
            }
        }
        None
    }

    /// Check that no row or column contains three consecutive identical symbols
    pub fn is_structurally_valid(&self) -> bool {
        self.first_run().is_none()
    }

    /// Goal predicate for the CSP entry point: complete, structurally valid,
    /// and every row and column carries the same `o` count as the first row.
    pub fn is_goal(&self) -> bool {
        if !self.is_complete() || !self.is_structurally_valid() {
            return false;
        }
        let target = self.count_in_row(0, Cell::O);
        (0..self.n).all(|i| self.count_in_row(i, Cell::O) == target)
            && (0..self.n).all(|j| self.count_in_column(j, Cell::O) == target)
    }

    /// Goal predicate for the backtracking entry point: complete, structurally
    /// valid, and every row and column carries exactly n/2 of each symbol.
    pub fn is_goal_exact_half(&self) -> bool {
        if !self.is_complete() || !self.is_structurally_valid() {
            return false;
        }
        let half = self.n / 2;
        (0..self.n).all(|i| {
            self.count_in_row(i, Cell::X) == half && self.count_in_row(i, Cell::O) == half
        }) && (0..self.n).all(|j| {
            self.count_in_column(j, Cell::X) == half && self.count_in_column(j, Cell::O) == half
        })
    }

    /// Balanced relaxation used while searching: in every row and column the
    /// placed `x` and `o` counts differ by at most `slack`.
    pub fn is_balanced(&self, slack: usize) -> bool {
        for i in 0..self.n {
            let x = self.count_in_row(i, Cell::X) as isize;
            let o = self.count_in_row(i, Cell::O) as isize;
            if (x - o).unsigned_abs() > slack {
                return false;
            }
        }
        for j in 0..self.n {
            let x = self.count_in_column(j, Cell::X) as isize;
            let o = self.count_in_column(j, Cell::O) as isize;
            if (x - o).unsigned_abs() > slack {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.n {
                write!(f, "{}", self.get(i, j).to_char())?;
            }
        }
        Ok(())
    }
}

//! Test suite for puzzle input validation
//! Validates the shape/alphabet/structural/already-solved preconditions

use crossgrid::{Axis, Error, Grid};

fn grid(lines: &[&str]) -> Grid {
    Grid::from_lines(lines).expect("test grid should parse")
}

mod parsing {
    use super::*;

    #[test]
    fn rejects_non_square_input() {
        let err = Grid::from_lines(["o__", "_x_"]).unwrap_err();
        assert!(
            matches!(err, Error::NonSquareBoard { .. }),
            "2 rows of 3 cells must fail the shape check, got {err:?}"
        );
    }

    #[test]
    fn rejects_empty_input() {
        let lines: [&str; 0] = [];
        assert!(matches!(
            Grid::from_lines(lines).unwrap_err(),
            Error::EmptyBoard
        ));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        let err = Grid::from_lines(["o_", "_9"]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellCharacter {
                character: '9',
                row: 1,
                column: 1
            }
        ));
    }

    #[test]
    fn accepts_the_full_alphabet() {
        let g = grid(&["xo_", "ox_", "___"]);
        assert_eq!(g.size(), 3);
    }
}

mod preconditions {
    use super::*;

    #[test]
    fn partial_grid_passes() {
        assert!(grid(&["o__", "_x_", "__o"]).validate_initial().is_ok());
    }

    #[test]
    fn existing_row_run_is_structural_failure() {
        let err = grid(&["_ooo", "____", "____", "____"])
            .validate_initial()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConsecutiveRun {
                axis: Axis::Row,
                index: 0
            }
        ));
    }

    #[test]
    fn existing_column_run_is_structural_failure() {
        let err = grid(&["_x__", "_x__", "_x__", "____"])
            .validate_initial()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConsecutiveRun {
                axis: Axis::Column,
                index: 1
            }
        ));
    }

    #[test]
    fn complete_goal_grid_is_already_solved() {
        // 4x4, two of each symbol per row and column, no triples
        let err = grid(&["xxoo", "ooxx", "xxoo", "ooxx"])
            .validate_initial()
            .unwrap_err();
        assert!(matches!(err, Error::AlreadySolved));
    }

    #[test]
    fn rejections_are_mutually_exclusive() {
        // A complete grid with a run can never satisfy the goal predicate,
        // so it must surface as a structural failure, not already-solved.
        let err = grid(&["xxxo", "ooxx", "xxoo", "ooxx"])
            .validate_initial()
            .unwrap_err();
        assert!(matches!(err, Error::ConsecutiveRun { .. }));
    }

    #[test]
    fn surviving_grids_are_solver_ready() {
        // Neither rejection applies: the grid can always go to the solver,
        // whether or not a solution exists.
        for lines in [
            ["o__", "_x_", "__o"],
            ["___", "___", "___"],
            ["xx_", "___", "___"],
        ] {
            let g = grid(&lines);
            assert!(g.validate_initial().is_ok(), "{lines:?} should be accepted");
        }
    }

    #[test]
    fn validation_never_changes_the_grid() {
        let g = grid(&["o__", "_x_", "__o"]);
        let before = g.clone();
        let _ = g.validate_initial();
        let _ = g.validate_initial();
        assert_eq!(g, before);
    }
}

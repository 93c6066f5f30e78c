//! Rules of the crossing game
//!
//! The board is (n+2)×(n+2): an n×n interior with a one-cell border margin.
//! P1 starts on the left border column and races rightward; P2 starts on the
//! top border row and races downward. A piece steps one cell forward into an
//! unoccupied cell, or jumps two cells forward over an adjacent opposing
//! piece into an unoccupied landing cell. A player with no legal piece move
//! must pass. The first player to bring every piece to the far border wins.

use crate::error::{Error, Result};

use super::state::{Action, GameState, Player, Pos};

/// The crossing game for a given interior size n
#[derive(Debug, Clone, Copy)]
pub struct CrossingGame {
    n: usize,
}

impl CrossingGame {
    pub fn new(n: usize) -> Self {
        CrossingGame { n }
    }

    /// Interior size n
    pub fn interior(&self) -> usize {
        self.n
    }

    /// Board height including the border margin
    pub fn rows(&self) -> usize {
        self.n + 2
    }

    /// Board width including the border margin
    pub fn cols(&self) -> usize {
        self.n + 2
    }

    /// Initial state: P1's pieces down column 0, P2's across row 0, P1 to move
    pub fn initial_state(&self) -> GameState {
        let p1 = (1..=self.n).map(|r| Pos::new(r, 0)).collect();
        let p2 = (1..=self.n).map(|c| Pos::new(0, c)).collect();
        GameState::new(p1, p2, Player::P1)
    }

    fn on_board(&self, pos: Pos) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Legal actions for the player to move.
    ///
    /// Pieces are scanned in canonical order, the forward step before the
    /// jump, so the enumeration order is deterministic. When no piece can
    /// move, the sole action is [`Action::Pass`].
    pub fn actions(&self, state: &GameState) -> Vec<Action> {
        let mover = state.to_move();
        let opponent_pieces = state.pieces(mover.opponent());
        let mut actions = Vec::new();

        for &from in state.pieces(mover) {
            let (over, land) = match mover {
                Player::P1 => (
                    Pos::new(from.row, from.col + 1),
                    Pos::new(from.row, from.col + 2),
                ),
                Player::P2 => (
                    Pos::new(from.row + 1, from.col),
                    Pos::new(from.row + 2, from.col),
                ),
            };

            // one step forward
            if self.on_board(over) && !state.is_occupied(over) {
                actions.push(Action::Move { from, to: over });
            }

            // jump over an adjacent opposing piece
            if self.on_board(over)
                && self.on_board(land)
                && opponent_pieces.contains(&over)
                && !state.is_occupied(land)
            {
                actions.push(Action::Move { from, to: land });
            }
        }

        if actions.is_empty() {
            actions.push(Action::Pass);
        }
        actions
    }

    /// Apply an action, producing the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalAction`] when the mover has no piece at the
    /// action's origin. Actions produced by [`Self::actions`] never fail.
    pub fn result(&self, state: &GameState, action: &Action) -> Result<GameState> {
        match *action {
            Action::Pass => Ok(state.with_turn_passed()),
            Action::Move { from, to } => {
                state
                    .with_piece_moved(from, to)
                    .ok_or_else(|| Error::IllegalAction {
                        action: action.to_string(),
                    })
            }
        }
    }

    /// Terminal test: either player has every piece on their far border
    pub fn is_goal(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }

    /// The winning player, when the state is terminal
    pub fn winner(&self, state: &GameState) -> Option<Player> {
        let far_col = self.cols() - 1;
        let far_row = self.rows() - 1;

        if state.pieces(Player::P1).iter().all(|p| p.col == far_col) {
            return Some(Player::P1);
        }
        if state.pieces(Player::P2).iter().all(|p| p.row == far_row) {
            return Some(Player::P2);
        }
        None
    }

    /// Utility from the viewpoint of `player`.
    ///
    /// Unbounded (`±∞`) for decided states so no finite heuristic value can
    /// outrank a proven win or loss during search; `0` for non-terminal
    /// states.
    pub fn utility(&self, state: &GameState, player: Player) -> f64 {
        match self.winner(state) {
            Some(winner) if winner == player => f64::INFINITY,
            Some(_) => f64::NEG_INFINITY,
            None => 0.0,
        }
    }

    /// Render the board as rows of `.`/`X`/`O` for console reports
    pub fn render(&self, state: &GameState) -> String {
        let mut board = vec![vec!['.'; self.cols()]; self.rows()];
        for p in state.pieces(Player::P1) {
            board[p.row][p.col] = 'X';
        }
        for p in state.pieces(Player::P2) {
            board[p.row][p.col] = 'O';
        }
        board
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_places_pieces_on_the_border() {
        let game = CrossingGame::new(3);
        let state = game.initial_state();
        assert_eq!(
            state.pieces(Player::P1),
            &[Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)]
        );
        assert_eq!(
            state.pieces(Player::P2),
            &[Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
        assert_eq!(state.to_move(), Player::P1);
        assert!(!game.is_goal(&state));
    }

    #[test]
    fn every_opening_move_is_a_forward_step() {
        let game = CrossingGame::new(2);
        let actions = game.actions(&game.initial_state());
        assert_eq!(
            actions,
            vec![
                Action::Move {
                    from: Pos::new(1, 0),
                    to: Pos::new(1, 1)
                },
                Action::Move {
                    from: Pos::new(2, 0),
                    to: Pos::new(2, 1)
                },
            ]
        );
    }

    #[test]
    fn jump_requires_adjacent_opponent_and_free_landing() {
        let game = CrossingGame::new(2);
        // P1 piece at (1,1), P2 piece directly ahead at (1,2)
        let state = GameState::new(
            vec![Pos::new(1, 1), Pos::new(2, 0)],
            vec![Pos::new(1, 2), Pos::new(0, 2)],
            Player::P1,
        );
        let actions = game.actions(&state);
        assert!(actions.contains(&Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(1, 3)
        }));
        // stepping into the occupied cell is not offered
        assert!(!actions.contains(&Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(1, 2)
        }));
    }

    #[test]
    fn blocked_player_must_pass() {
        let game = CrossingGame::new(1);
        // P1's only piece sits before the far border with a P2 piece ahead
        // and another on the landing cell: no step, no jump.
        let state = GameState::new(
            vec![Pos::new(1, 0)],
            vec![Pos::new(1, 1), Pos::new(1, 2)],
            Player::P1,
        );
        assert_eq!(game.actions(&state), vec![Action::Pass]);

        let passed = game.result(&state, &Action::Pass).unwrap();
        assert_eq!(passed.to_move(), Player::P2);
        assert_eq!(passed.pieces(Player::P1), state.pieces(Player::P1));
    }

    #[test]
    fn winner_and_utility_agree() {
        let game = CrossingGame::new(2);
        let won = GameState::new(
            vec![Pos::new(1, 3), Pos::new(2, 3)],
            vec![Pos::new(0, 1), Pos::new(0, 2)],
            Player::P2,
        );
        assert_eq!(game.winner(&won), Some(Player::P1));
        assert_eq!(game.utility(&won, Player::P1), f64::INFINITY);
        assert_eq!(game.utility(&won, Player::P2), f64::NEG_INFINITY);

        let open = game.initial_state();
        assert_eq!(game.utility(&open, Player::P1), 0.0);
    }

    #[test]
    fn render_marks_both_piece_sets() {
        let game = CrossingGame::new(1);
        let rendered = game.render(&game.initial_state());
        assert_eq!(rendered, ".O.\nX..\n...");
    }
}

//! Immutable state values for the crossing game

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player in the crossing game: P1 races rightward, P2 races downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::P1 => write!(f, "P1"),
            Player::P2 => write!(f, "P2"),
        }
    }
}

/// A board coordinate, 0-based, including the one-cell border margin
///
/// The derived ordering (row, then column) is the canonical piece order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move in the crossing game
///
/// `Pass` is the sole legal action when no piece of the mover can step or
/// jump; it flips the turn without touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Pass,
    Move { from: Pos, to: Pos },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => write!(f, "pass"),
            Action::Move { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}

/// Complete game state: both piece sets and the player to move
///
/// Piece vectors are kept sorted, so states that hold the same piece sets
/// compare and hash equal regardless of the move order that produced them.
/// All transitions return fresh values; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    p1: Vec<Pos>,
    p2: Vec<Pos>,
    to_move: Player,
}

impl GameState {
    /// Create a state, canonicalizing both piece sets
    pub fn new(mut p1: Vec<Pos>, mut p2: Vec<Pos>, to_move: Player) -> Self {
        p1.sort_unstable();
        p2.sort_unstable();
        GameState { p1, p2, to_move }
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The pieces of one player, in canonical order
    pub fn pieces(&self, player: Player) -> &[Pos] {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    /// Whether any piece of either player occupies the position
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.p1.contains(&pos) || self.p2.contains(&pos)
    }

    /// New state with the turn passed to the opponent, board untouched
    #[must_use = "with_turn_passed returns a new state; the original is unchanged"]
    pub(crate) fn with_turn_passed(&self) -> Self {
        GameState {
            p1: self.p1.clone(),
            p2: self.p2.clone(),
            to_move: self.to_move.opponent(),
        }
    }

    /// New state with one piece of the mover relocated and the mover's piece
    /// set re-canonicalized; the turn flips to the opponent.
    ///
    /// Returns `None` when the mover has no piece at `from`.
    #[must_use = "with_piece_moved returns a new state; the original is unchanged"]
    pub(crate) fn with_piece_moved(&self, from: Pos, to: Pos) -> Option<Self> {
        let mut p1 = self.p1.clone();
        let mut p2 = self.p2.clone();

        let mover = match self.to_move {
            Player::P1 => &mut p1,
            Player::P2 => &mut p2,
        };
        let idx = mover.iter().position(|&p| p == from)?;
        mover[idx] = to;
        mover.sort_unstable();

        Some(GameState {
            p1,
            p2,
            to_move: self.to_move.opponent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_sets_are_canonically_sorted() {
        let a = GameState::new(
            vec![Pos::new(2, 0), Pos::new(1, 0)],
            vec![Pos::new(0, 2), Pos::new(0, 1)],
            Player::P1,
        );
        let b = GameState::new(
            vec![Pos::new(1, 0), Pos::new(2, 0)],
            vec![Pos::new(0, 1), Pos::new(0, 2)],
            Player::P1,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn moving_a_piece_keeps_the_set_sorted() {
        let state = GameState::new(
            vec![Pos::new(1, 0), Pos::new(2, 3)],
            vec![Pos::new(0, 1)],
            Player::P1,
        );
        let next = state
            .with_piece_moved(Pos::new(1, 0), Pos::new(1, 4))
            .expect("piece exists");
        assert_eq!(next.pieces(Player::P1), &[Pos::new(1, 4), Pos::new(2, 3)]);
        assert_eq!(next.to_move(), Player::P2);
        // original untouched
        assert_eq!(state.pieces(Player::P1), &[Pos::new(1, 0), Pos::new(2, 3)]);
    }

    #[test]
    fn moving_a_missing_piece_is_rejected() {
        let state = GameState::new(vec![Pos::new(1, 0)], vec![], Player::P1);
        assert!(
            state
                .with_piece_moved(Pos::new(9, 9), Pos::new(9, 8))
                .is_none()
        );
    }
}

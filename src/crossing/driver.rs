//! Self-playing match driver for the crossing game
//!
//! Alternates the two policies, applies each chosen action, checks for the
//! goal after every move, and accumulates timing telemetry. A policy or
//! rules error does not propagate: it is logged, the loop aborts, and the
//! match is reported as aborted.

use std::time::Instant;

use serde::Serialize;

use super::game::CrossingGame;
use super::policy::MovePolicy;
use super::state::{Action, GameState, Player};

/// Receives one callback per applied turn; the console report hangs off this
pub trait TurnObserver {
    fn on_turn(&mut self, game: &CrossingGame, record: &TurnRecord, state_after: &GameState) {
        let _ = (game, record, state_after);
    }
}

/// Observer that ignores every turn
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TurnObserver for NullObserver {}

/// One applied turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: Player,
    pub action: Action,
    pub seconds: f64,
}

/// How the match ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// A player brought every piece home
    Winner(Player),
    /// Both players passed consecutively: nothing can ever move again
    Stalemate,
    /// A policy or rules error ended the match early
    Aborted { reason: String },
}

/// Per-player timing summary
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub player: Player,
    pub policy: String,
    pub depth: u32,
    pub moves: usize,
    pub average_move_seconds: f64,
}

/// Full record of one match
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub board_size: usize,
    pub termination: Termination,
    pub turns: Vec<TurnRecord>,
    pub total_seconds: f64,
    pub p1: PlayerSummary,
    pub p2: PlayerSummary,
}

impl MatchReport {
    /// The winner, when the match ended with one
    pub fn winner(&self) -> Option<Player> {
        match self.termination {
            Termination::Winner(player) => Some(player),
            _ => None,
        }
    }

    /// The timing summary for one player
    pub fn summary(&self, player: Player) -> &PlayerSummary {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }
}

/// Play one match from the initial state until a goal, stalemate, or abort.
///
/// Each side's policy chooses its action; move durations are recorded per
/// player and the goal is checked after every applied move. Two consecutive
/// passes end the match as a stalemate: a pass leaves the board untouched,
/// so neither side will ever move again.
pub fn play_match(
    game: &CrossingGame,
    p1: &mut dyn MovePolicy,
    p2: &mut dyn MovePolicy,
    observer: &mut dyn TurnObserver,
) -> MatchReport {
    let mut state = game.initial_state();
    let mut turns: Vec<TurnRecord> = Vec::new();
    let mut consecutive_passes = 0usize;
    let mut termination = None;

    let match_start = Instant::now();
    let mut turn = 1usize;

    while termination.is_none() {
        if game.is_goal(&state) {
            termination = Some(Termination::Winner(
                game.winner(&state).expect("goal state has a winner"),
            ));
            break;
        }

        let mover = state.to_move();
        let policy: &mut dyn MovePolicy = match mover {
            Player::P1 => &mut *p1,
            Player::P2 => &mut *p2,
        };

        let move_start = Instant::now();
        let action = match policy.choose(game, &state) {
            Ok(action) => action,
            Err(err) => {
                eprintln!("turn {turn}: {mover} search error: {err}");
                termination = Some(Termination::Aborted {
                    reason: err.to_string(),
                });
                break;
            }
        };

        state = match game.result(&state, &action) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("turn {turn}: {mover} produced an illegal action: {err}");
                termination = Some(Termination::Aborted {
                    reason: err.to_string(),
                });
                break;
            }
        };

        let record = TurnRecord {
            turn,
            player: mover,
            action,
            seconds: move_start.elapsed().as_secs_f64(),
        };
        observer.on_turn(game, &record, &state);
        turns.push(record);

        consecutive_passes = match action {
            Action::Pass => consecutive_passes + 1,
            Action::Move { .. } => 0,
        };
        if consecutive_passes >= 2 {
            termination = Some(Termination::Stalemate);
        }

        turn += 1;
    }

    let total_seconds = match_start.elapsed().as_secs_f64();
    let p1_summary = summarize(&turns, Player::P1, p1);
    let p2_summary = summarize(&turns, Player::P2, p2);

    MatchReport {
        board_size: game.interior(),
        termination: termination.expect("loop exits with a termination"),
        turns,
        total_seconds,
        p1: p1_summary,
        p2: p2_summary,
    }
}

fn summarize(turns: &[TurnRecord], player: Player, policy: &dyn MovePolicy) -> PlayerSummary {
    let durations: Vec<f64> = turns
        .iter()
        .filter(|t| t.player == player)
        .map(|t| t.seconds)
        .collect();
    let average = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };
    PlayerSummary {
        player,
        policy: policy.name().to_string(),
        depth: policy.depth(),
        moves: durations.len(),
        average_move_seconds: average,
    }
}

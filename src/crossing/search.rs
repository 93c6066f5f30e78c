//! Depth-limited adversarial search for the crossing game
//!
//! [`alpha_beta`] is the production search: minimax with alpha-beta pruning
//! and a heuristic cutoff at the depth limit. [`minimax`] is the exhaustive
//! reference at the same contract, kept to cross-check that pruning never
//! changes the chosen action. Both thread the fixed perspective player
//! explicitly through every call, so the search holds no hidden state and a
//! given (state, depth, perspective) always yields the same action.

use crate::error::{Error, Result};

use super::game::CrossingGame;
use super::state::{Action, GameState, Player};

/// Cutoff heuristic: the opponent's total remaining forward distance minus
/// the perspective player's, each piece counting the forward steps still
/// needed to reach its goal border. Larger is better for the perspective
/// player.
pub fn distance_eval(game: &CrossingGame, state: &GameState, perspective: Player) -> f64 {
    let far_col = game.cols() - 1;
    let far_row = game.rows() - 1;

    let p1_dist: usize = state
        .pieces(Player::P1)
        .iter()
        .map(|p| far_col - p.col)
        .sum();
    let p2_dist: usize = state
        .pieces(Player::P2)
        .iter()
        .map(|p| far_row - p.row)
        .sum();

    match perspective {
        Player::P1 => p2_dist as f64 - p1_dist as f64,
        Player::P2 => p1_dist as f64 - p2_dist as f64,
    }
}

/// Choose an action by depth-limited minimax with alpha-beta pruning.
///
/// The node maximizes when the player to move is `perspective` and minimizes
/// otherwise; terminal states score through [`CrossingGame::utility`] and
/// non-terminal states at depth zero through [`distance_eval`]. Ties resolve
/// to the action enumerated first.
///
/// # Errors
///
/// Returns [`Error::SearchFailure`] when the state offers no action, which
/// cannot happen for states produced by the game rules (a blocked player
/// always has `Pass`).
pub fn alpha_beta(
    game: &CrossingGame,
    state: &GameState,
    depth: u32,
    perspective: Player,
) -> Result<Action> {
    choose(game, state, depth, perspective, true)
}

/// Choose an action by exhaustive minimax at the same depth and evaluation.
///
/// Reference implementation: explores every branch alpha-beta would prune.
pub fn minimax(
    game: &CrossingGame,
    state: &GameState,
    depth: u32,
    perspective: Player,
) -> Result<Action> {
    choose(game, state, depth, perspective, false)
}

fn choose(
    game: &CrossingGame,
    state: &GameState,
    depth: u32,
    perspective: Player,
    prune: bool,
) -> Result<Action> {
    let actions = game.actions(state);
    if actions.is_empty() {
        return Err(Error::SearchFailure {
            context: format!("no actions available for {}", state.to_move()),
        });
    }

    let maximizing = state.to_move() == perspective;
    let mut best: Option<(Action, f64)> = None;
    let mut alpha = f64::NEG_INFINITY;
    let mut beta = f64::INFINITY;

    for action in actions {
        let next = game.result(state, &action)?;
        let value = if prune {
            bounded_value(
                game,
                &next,
                depth.saturating_sub(1),
                alpha,
                beta,
                perspective,
            )?
        } else {
            full_value(game, &next, depth.saturating_sub(1), perspective)?
        };

        let better = match best {
            None => true,
            Some((_, best_value)) => {
                if maximizing {
                    value > best_value
                } else {
                    value < best_value
                }
            }
        };
        if better {
            best = Some((action, value));
        }

        if prune {
            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
        }
    }

    Ok(best.expect("actions were non-empty").0)
}

fn bounded_value(
    game: &CrossingGame,
    state: &GameState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    perspective: Player,
) -> Result<f64> {
    if game.is_goal(state) {
        return Ok(game.utility(state, perspective));
    }
    if depth == 0 {
        return Ok(distance_eval(game, state, perspective));
    }

    if state.to_move() == perspective {
        let mut value = f64::NEG_INFINITY;
        for action in game.actions(state) {
            let next = game.result(state, &action)?;
            value = value.max(bounded_value(game, &next, depth - 1, alpha, beta, perspective)?);
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    } else {
        let mut value = f64::INFINITY;
        for action in game.actions(state) {
            let next = game.result(state, &action)?;
            value = value.min(bounded_value(game, &next, depth - 1, alpha, beta, perspective)?);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

fn full_value(
    game: &CrossingGame,
    state: &GameState,
    depth: u32,
    perspective: Player,
) -> Result<f64> {
    if game.is_goal(state) {
        return Ok(game.utility(state, perspective));
    }
    if depth == 0 {
        return Ok(distance_eval(game, state, perspective));
    }

    let maximizing = state.to_move() == perspective;
    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for action in game.actions(state) {
        let next = game.result(state, &action)?;
        let child = full_value(game, &next, depth - 1, perspective)?;
        value = if maximizing {
            value.max(child)
        } else {
            value.min(child)
        };
    }
    Ok(value)
}

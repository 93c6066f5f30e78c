//! Move-selection policies for the match driver
//!
//! The driver talks to both sides through the [`MovePolicy`] trait, so a
//! search player, a random baseline, or anything else can sit on either side
//! of the board.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::error::{Error, Result};

use super::game::CrossingGame;
use super::search::alpha_beta;
use super::state::{Action, GameState};

/// A strategy that chooses one action per turn
pub trait MovePolicy {
    /// Short name for reports
    fn name(&self) -> &str;

    /// Search depth to report in telemetry (zero for non-search policies)
    fn depth(&self) -> u32;

    /// Choose an action for the player to move in `state`
    fn choose(&mut self, game: &CrossingGame, state: &GameState) -> Result<Action>;
}

/// Alpha-beta search at a fixed depth, from the mover's perspective
#[derive(Debug, Clone, Copy)]
pub struct SearchPolicy {
    depth: u32,
}

impl SearchPolicy {
    pub fn new(depth: u32) -> Self {
        SearchPolicy { depth }
    }
}

impl MovePolicy for SearchPolicy {
    fn name(&self) -> &str {
        "alpha-beta"
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn choose(&mut self, game: &CrossingGame, state: &GameState) -> Result<Action> {
        alpha_beta(game, state, self.depth, state.to_move())
    }
}

/// Uniform random choice among the legal actions, seeded for reproducibility
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn seeded(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn depth(&self) -> u32 {
        0
    }

    fn choose(&mut self, game: &CrossingGame, state: &GameState) -> Result<Action> {
        let actions = game.actions(state);
        actions
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::SearchFailure {
                context: format!("no actions available for {}", state.to_move()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_policy_is_reproducible_for_a_seed() {
        let game = CrossingGame::new(3);
        let state = game.initial_state();

        let mut a = RandomPolicy::seeded(7);
        let mut b = RandomPolicy::seeded(7);
        for _ in 0..5 {
            assert_eq!(
                a.choose(&game, &state).unwrap(),
                b.choose(&game, &state).unwrap()
            );
        }
    }

    #[test]
    fn search_policy_reports_its_depth() {
        let policy = SearchPolicy::new(4);
        assert_eq!(policy.depth(), 4);
        assert_eq!(policy.name(), "alpha-beta");
    }
}

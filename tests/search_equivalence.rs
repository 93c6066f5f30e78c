//! Test suite for the adversarial search
//! Determinism, pruning equivalence, and bounded game termination

use crossgrid::crossing::{NullObserver, SearchPolicy, alpha_beta, driver, minimax};
use crossgrid::{Action, CrossingGame, GameState, Player};

/// Walk a few plies of best play to collect reachable test states
fn sample_states(game: &CrossingGame, plies: usize) -> Vec<GameState> {
    let mut states = vec![game.initial_state()];
    let mut current = game.initial_state();
    for _ in 0..plies {
        if game.is_goal(&current) {
            break;
        }
        let action = alpha_beta(game, &current, 2, current.to_move()).expect("legal state");
        current = game.result(&current, &action).expect("legal action");
        states.push(current.clone());
    }
    states
}

mod determinism {
    use super::*;

    #[test]
    fn identical_calls_choose_identical_actions() {
        let game = CrossingGame::new(2);
        for state in sample_states(&game, 6) {
            if game.is_goal(&state) {
                continue;
            }
            let perspective = state.to_move();
            for depth in [1, 2, 3] {
                let first = alpha_beta(&game, &state, depth, perspective).unwrap();
                let second = alpha_beta(&game, &state, depth, perspective).unwrap();
                assert_eq!(first, second, "depth {depth} must be reproducible");
            }
        }
    }
}

mod pruning_equivalence {
    use super::*;

    #[test]
    fn alpha_beta_matches_exhaustive_minimax() {
        let game = CrossingGame::new(2);
        for state in sample_states(&game, 8) {
            if game.is_goal(&state) {
                continue;
            }
            let perspective = state.to_move();
            for depth in [1, 2, 3] {
                let pruned = alpha_beta(&game, &state, depth, perspective).unwrap();
                let exhaustive = minimax(&game, &state, depth, perspective).unwrap();
                assert_eq!(
                    pruned, exhaustive,
                    "pruning changed the chosen action at depth {depth}"
                );
            }
        }
    }

    #[test]
    fn equivalence_holds_on_the_tiny_board() {
        let game = CrossingGame::new(1);
        let state = game.initial_state();
        for depth in [1, 2, 3, 4] {
            assert_eq!(
                alpha_beta(&game, &state, depth, Player::P1).unwrap(),
                minimax(&game, &state, depth, Player::P1).unwrap()
            );
        }
    }
}

mod termination {
    use super::*;

    #[test]
    fn depth_one_match_on_n2_finishes_quickly() {
        let game = CrossingGame::new(2);
        let mut p1 = SearchPolicy::new(1);
        let mut p2 = SearchPolicy::new(1);
        let report = driver::play_match(&game, &mut p1, &mut p2, &mut NullObserver);

        assert!(
            report.winner().is_some(),
            "n=2 at depth 1 must produce a winner, got {:?}",
            report.termination
        );
        // Each of the four pieces needs at most 3 forward steps; with jumps
        // and interleaving the whole match stays well under the perimeter
        // bound.
        assert!(
            report.turns.len() <= 32,
            "match ran {} turns, expected a small bound",
            report.turns.len()
        );
    }

    #[test]
    fn matches_never_loop_on_passes() {
        let game = CrossingGame::new(3);
        let mut p1 = SearchPolicy::new(2);
        let mut p2 = SearchPolicy::new(3);
        let report = driver::play_match(&game, &mut p1, &mut p2, &mut NullObserver);

        let consecutive_passes = report
            .turns
            .windows(2)
            .filter(|w| w.iter().all(|t| matches!(t.action, Action::Pass)))
            .count();
        assert!(
            consecutive_passes <= 1,
            "driver must stop at the first double pass"
        );
    }
}

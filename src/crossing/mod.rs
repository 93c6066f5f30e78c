//! Crossing race game: rules, adversarial search, policies, and match driver

pub mod driver;
pub mod game;
pub mod policy;
pub mod search;
pub mod state;

pub use driver::{MatchReport, NullObserver, PlayerSummary, Termination, TurnObserver, TurnRecord};
pub use game::CrossingGame;
pub use policy::{MovePolicy, RandomPolicy, SearchPolicy};
pub use search::{alpha_beta, distance_eval, minimax};
pub use state::{Action, GameState, Player, Pos};

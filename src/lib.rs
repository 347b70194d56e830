//! Optimal tic-tac-toe play through exhaustive minimax search with alpha-beta pruning.
//!
//! The [`board`] module holds the pure game rules over an immutable [`Grid`]; the
//! [`search`] module walks the game tree to pick the best action for the player to move.
//!
//! ```
//! use tictactoe::{apply, best_move, initial_grid, is_terminal, score};
//!
//! let mut grid = initial_grid();
//! while let Some(action) = best_move(&grid) {
//!     grid = apply(&grid, action).unwrap();
//! }
//! assert!(is_terminal(&grid));
//! assert_eq!(score(&grid), 0);
//! ```

pub mod board;
pub mod search;

pub use board::action::Action;
pub use board::cell::{Cell, Player};
pub use board::error::BoardError;
pub use board::rules::{
    apply, initial_grid, is_terminal, legal_actions, player_to_move, score, winner, Outcome,
};
pub use board::Grid;
pub use search::position_counter::{count_games, count_positions};
pub use search::{
    best_move, principal_variation, SearchConfig, SearchStrategy, Searcher,
};

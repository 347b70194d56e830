//! Minimax search with alpha-beta pruning.
//!
//! The tree is always searched to terminal leaves; there is no depth limit and no
//! heuristic evaluation, since a game lasts at most nine plies. X is the maximizing
//! player and O the minimizing player, and scores are those of [`score`].
//!
//! Actions are visited in ascending (row, column) order at every node. Among equally
//! good actions at the root the first one found wins, which makes results reproducible
//! and independent of whether pruning is enabled.

pub mod move_orderer;
pub mod position_counter;


use std::cmp::{max, min};
use std::str::FromStr;

use log::{debug, trace};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::action::Action;
use crate::board::rules::{apply, is_terminal, player_to_move, score, Outcome};
use crate::board::Grid;
use move_orderer::ordered_actions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Plain minimax: every node of the tree is visited.
    Minimax,
    AlphaBeta,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::AlphaBeta
    }
}

impl FromStr for SearchStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alpha-beta" => Ok(SearchStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
}

/// Runs searches and keeps statistics about the most recent one.
#[derive(Debug, Default)]
pub struct Searcher {
    config: SearchConfig,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<Outcome>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self::new(SearchConfig { strategy })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Number of positions evaluated below the root during the last search.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Number of alpha-beta cutoffs taken during the last search.
    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    /// Value of the chosen action in the last search, `None` if the grid was terminal.
    pub fn last_score(&self) -> Option<Outcome> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
        self.last_score = None;
    }

    /// Returns the optimal action for the player to move, or `None` if the game is over.
    /// The grid itself is never modified.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn search(&mut self, grid: &Grid) -> Option<Action> {
        self.reset_stats();

        if is_terminal(grid) {
            return None;
        }

        let current_player = player_to_move(grid);
        let maximizing = current_player.maximize_score();
        let mut alpha = Outcome::MIN;
        let mut beta = Outcome::MAX;
        let mut best_score = if maximizing { Outcome::MIN } else { Outcome::MAX };
        let mut best_action = None;

        for action in ordered_actions(grid) {
            let child = successor(grid, action);
            let value = if maximizing {
                self.min_value(&child, alpha, beta)
            } else {
                self.max_value(&child, alpha, beta)
            };
            trace!("{} at {} scores {}", current_player, action, value);

            let improves = if maximizing {
                value > best_score
            } else {
                value < best_score
            };
            if improves {
                best_score = value;
                best_action = Some(action);
            }

            if maximizing {
                alpha = max(alpha, best_score);
            } else {
                beta = min(beta, best_score);
            }
            if self.prunes() && alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        self.last_score = best_action.map(|_| best_score);
        debug!(
            "best move for {}: {:?} (score {}, {} positions searched, {} cutoffs)",
            current_player,
            best_action,
            best_score,
            self.searched_position_count,
            self.termination_count
        );

        best_action
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn max_value(&mut self, grid: &Grid, mut alpha: Outcome, beta: Outcome) -> Outcome {
        self.searched_position_count += 1;

        if is_terminal(grid) {
            return score(grid);
        }

        let mut value = Outcome::MIN;
        for action in ordered_actions(grid) {
            value = max(value, self.min_value(&successor(grid, action), alpha, beta));
            if self.prunes() && value >= beta {
                self.termination_count += 1;
                return value;
            }
            alpha = max(alpha, value);
        }

        value
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn min_value(&mut self, grid: &Grid, alpha: Outcome, mut beta: Outcome) -> Outcome {
        self.searched_position_count += 1;

        if is_terminal(grid) {
            return score(grid);
        }

        let mut value = Outcome::MAX;
        for action in ordered_actions(grid) {
            value = min(value, self.max_value(&successor(grid, action), alpha, beta));
            if self.prunes() && value <= alpha {
                self.termination_count += 1;
                return value;
            }
            beta = min(beta, value);
        }

        value
    }

    fn prunes(&self) -> bool {
        self.config.strategy == SearchStrategy::AlphaBeta
    }
}

/// Returns the optimal action for the player to move on `grid`, or `None` if the game
/// is already over.
pub fn best_move(grid: &Grid) -> Option<Action> {
    Searcher::default().search(grid)
}

/// Plays [`best_move`] for both sides until the game ends and returns the actions taken.
pub fn principal_variation(grid: &Grid) -> Vec<Action> {
    let mut searcher = Searcher::default();
    let mut current = *grid;
    let mut line = Vec::new();

    while let Some(action) = searcher.search(&current) {
        current = successor(&current, action);
        line.push(action);
    }

    line
}

/// Applies an action taken from `legal_actions`, which cannot fail.
pub(crate) fn successor(grid: &Grid, action: Action) -> Grid {
    match apply(grid, action) {
        Ok(next) => next,
        Err(err) => unreachable!("legal action {} was rejected: {}", action, err),
    }
}

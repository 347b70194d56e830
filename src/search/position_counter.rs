//! Exhaustive game-tree enumeration, used to validate the rules and the searcher's
//! node accounting against the known tic-tac-toe tree sizes.

use crate::board::rules::{is_terminal, legal_actions};
use crate::board::Grid;

use super::successor;

/// Counts the positions exactly `depth` plies below `grid`. Finished games are never
/// expanded, so a game won at ply 5 contributes nothing to depth 6.
pub fn count_positions(grid: &Grid, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    if is_terminal(grid) {
        return 0;
    }

    legal_actions(grid)
        .into_iter()
        .map(|action| count_positions(&successor(grid, action), depth - 1))
        .sum()
}

/// Counts the distinct move sequences from `grid` to a finished game.
pub fn count_games(grid: &Grid) -> usize {
    if is_terminal(grid) {
        return 1;
    }

    legal_actions(grid)
        .into_iter()
        .map(|action| count_games(&successor(grid, action)))
        .sum()
}

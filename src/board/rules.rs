//! Pure game rules over a [`Grid`]. None of these functions mutate their input.

use rustc_hash::FxHashSet;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::action::Action;
use super::cell::{Cell, Player};
use super::error::BoardError;
use super::Grid;

/// Game-theoretic value of a grid from X's perspective: `1` when X has won, `-1` when O
/// has won, `0` otherwise.
pub type Outcome = i8;

const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn initial_grid() -> Grid {
    Grid::new()
}

/// X moves whenever both sides have placed the same number of marks.
///
/// Panics if the grid could not have been reached by alternating play from X.
pub fn player_to_move(grid: &Grid) -> Player {
    let x = grid.count(Player::X);
    let o = grid.count(Player::O);
    assert!(
        x == o || x == o + 1,
        "grid has {} X marks and {} O marks, which alternating play cannot produce",
        x,
        o
    );

    if x == o {
        Player::X
    } else {
        Player::O
    }
}

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn legal_actions(grid: &Grid) -> FxHashSet<Action> {
    grid.iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}

/// Returns the grid produced by the player to move marking `action`.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn apply(grid: &Grid, action: Action) -> Result<Grid, BoardError> {
    let Action { row, col } = action;
    match grid.get(action) {
        None => Err(BoardError::OutOfBounds { row, col }),
        Some(Cell::Marked(_)) => Err(BoardError::CellOccupied { row, col }),
        Some(Cell::Empty) => Ok(grid.with_mark(action, player_to_move(grid))),
    }
}

/// Returns the owner of a completed line, if any. At most one player can own a line in
/// a grid reached by legal play, so the scan order is irrelevant.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn winner(grid: &Grid) -> Option<Player> {
    let cells = grid.cells();
    LINES.iter().find_map(|&[(r0, c0), (r1, c1), (r2, c2)]| {
        let first = cells[r0][c0];
        if first == cells[r1][c1] && first == cells[r2][c2] {
            first.mark()
        } else {
            None
        }
    })
}

pub fn is_terminal(grid: &Grid) -> bool {
    winner(grid).is_some() || grid.is_full()
}

/// Only meaningful for terminal grids; non-terminal grids score `0`.
pub fn score(grid: &Grid) -> Outcome {
    match winner(grid) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

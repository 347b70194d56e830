pub mod action;
pub mod cell;
pub mod error;
pub mod rules;

mod display;

use action::Action;
use cell::{Cell, Player};
use error::BoardError;

pub const SIZE: usize = 3;

/// An immutable 3x3 tic-tac-toe grid. Every transformation returns a new `Grid`; the
/// type is `Copy` so each level of a search owns its own independent copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a grid from raw cells, rejecting mark counts that alternating play
    /// starting with X can never produce.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let grid = Self { cells };
        let (x, o) = (grid.count(Player::X), grid.count(Player::O));
        if !counts_are_consistent(x, o) {
            return Err(BoardError::InconsistentMarkCounts { x, o });
        }
        Ok(grid)
    }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the cell targeted by `action`, or `None` when it lies off the grid.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    pub fn is_empty_at(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Marked(player))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn is_consistent(&self) -> bool {
        counts_are_consistent(self.count(Player::X), self.count(Player::O))
    }

    /// Iterates every position in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Action::new(row, col), cell))
        })
    }

    /// Returns a copy of this grid with `player`'s mark placed at `action`. Callers
    /// validate the action first.
    pub(crate) fn with_mark(&self, action: Action, player: Player) -> Self {
        let mut next = *self;
        next.cells[action.row][action.col] = Cell::Marked(player);
        next
    }
}

fn counts_are_consistent(x: usize, o: usize) -> bool {
    x == o || x == o + 1
}

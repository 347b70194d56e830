use super::cell::Cell;
use super::error::BoardError;
use super::{Grid, SIZE};
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells().iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses nine cell symbols in row-major order. Whitespace and `/` row separators are
/// ignored, so both `"XO./.../..."` and the multi-line `Display` output are accepted.
impl FromStr for Grid {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != SIZE * SIZE {
            return Err(BoardError::InvalidGridLength { len: symbols.len() });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &symbol) in symbols.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(symbol).ok_or(BoardError::InvalidCellSymbol { symbol })?;
        }
        Grid::from_cells(cells)
    }
}

/// Builds a `Grid` from bare tokens, one symbol per cell, top row first:
///
/// ```
/// use tictactoe::grid;
///
/// let grid = grid! {
///     X X .
///     O . .
///     . . .
/// };
/// assert_eq!(tictactoe::best_move(&grid), Some(tictactoe::Action::new(0, 2)));
/// ```
#[macro_export]
macro_rules! grid {
    ($($cell:tt)*) => {{
        let symbols: String = stringify!($($cell)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        symbols
            .parse::<$crate::board::Grid>()
            .expect("invalid grid literal")
    }};
}

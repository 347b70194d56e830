use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot apply action ({row}, {col}), it lies outside the 3x3 grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cannot apply action ({row}, {col}), the cell is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("Invalid grid, expected 9 cells but got {len}")]
    InvalidGridLength { len: usize },
    #[error("Invalid cell symbol {symbol:?}, expected one of X, O, .")]
    InvalidCellSymbol { symbol: char },
    #[error("Invalid grid, {x} X marks and {o} O marks cannot arise from alternating play")]
    InconsistentMarkCounts { x: usize, o: usize },
}

//! Rejection reasons for board construction and selection.
//!
//! Every rejection leaves the board exactly as it was; callers may ignore
//! the error (a dropped click) or surface it.

use super::column::Column;

/// Why a selection request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// Row or column outside `0..5`.
    InvalidCoordinate { row: usize, col: usize },
    /// The free space cannot be toggled.
    FreeCell,
    /// The cell's number has not been called yet.
    CellNotCalled { number: u8 },
    /// Selection is gated off (game not in progress).
    EngineDisabled,
    /// The board already completed a line and is frozen.
    AlreadyWon,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::InvalidCoordinate { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            SelectError::FreeCell => write!(f, "the free space cannot be toggled"),
            SelectError::CellNotCalled { number } => write!(f, "{} has not been called", number),
            SelectError::EngineDisabled => write!(f, "selection is disabled"),
            SelectError::AlreadyWon => write!(f, "board has already won"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Why an explicit board layout was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A number does not belong to the column it was placed in.
    OutOfBand { row: usize, column: Column, number: u8 },
    /// The centre entry must be `0` (the free space).
    CenterNotFree { number: u8 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfBand { row, column, number } => write!(
                f,
                "{} in row {} is outside column {} ({:?})",
                number,
                row,
                column,
                column.band()
            ),
            BoardError::CenterNotFree { number } => {
                write!(f, "centre must be the free space, found {}", number)
            }
        }
    }
}

impl std::error::Error for BoardError {}

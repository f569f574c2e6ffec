//! Win lines and win detection.
//!
//! There are exactly twelve lines: five rows, five columns, two diagonals.
//! They are always checked in that order so the reported line is stable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Coord;
use super::column::GRID_SIZE;
use super::grid::Board;

/// One of the twelve lines that can complete a bingo.
///
/// Row and column indices above 4 are rejected on deserialization. A value
/// built by hand with such an index has no coordinates and never completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LineRepr")]
pub enum WinLine {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Unchecked wire shape of `WinLine`.
#[derive(Deserialize)]
enum LineRepr {
    Row(u8),
    Column(u8),
    MainDiagonal,
    AntiDiagonal,
}

impl TryFrom<LineRepr> for WinLine {
    type Error = String;

    fn try_from(repr: LineRepr) -> Result<Self, Self::Error> {
        let line = match repr {
            LineRepr::Row(row) => WinLine::row(usize::from(row)),
            LineRepr::Column(col) => WinLine::column(usize::from(col)),
            LineRepr::MainDiagonal => Some(WinLine::MainDiagonal),
            LineRepr::AntiDiagonal => Some(WinLine::AntiDiagonal),
        };
        line.ok_or_else(|| format!("line index out of range 0..{}", GRID_SIZE))
    }
}

impl WinLine {
    /// Every line in evaluation order.
    pub const ALL: [WinLine; 12] = [
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Row(3),
        WinLine::Row(4),
        WinLine::Column(0),
        WinLine::Column(1),
        WinLine::Column(2),
        WinLine::Column(3),
        WinLine::Column(4),
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// Row line, `None` outside `0..5`.
    #[must_use]
    pub fn row(index: usize) -> Option<Self> {
        (index < GRID_SIZE).then_some(WinLine::Row(index as u8))
    }

    /// Column line, `None` outside `0..5`.
    #[must_use]
    pub fn column(index: usize) -> Option<Self> {
        (index < GRID_SIZE).then_some(WinLine::Column(index as u8))
    }

    /// The five positions on this line, `None` if the index is off the board.
    #[must_use]
    pub fn coords(self) -> Option<[Coord; GRID_SIZE]> {
        if let WinLine::Row(i) | WinLine::Column(i) = self {
            if usize::from(i) >= GRID_SIZE {
                return None;
            }
        }

        let last = GRID_SIZE as u8 - 1;
        Some(std::array::from_fn(|i| {
            let i = i as u8;
            match self {
                WinLine::Row(row) => Coord::at(row, i),
                WinLine::Column(col) => Coord::at(i, col),
                WinLine::MainDiagonal => Coord::at(i, i),
                WinLine::AntiDiagonal => Coord::at(i, last - i),
            }
        }))
    }

    /// Whether all five cells on this line are selected.
    #[must_use]
    pub fn is_complete(self, board: &Board) -> bool {
        self.coords()
            .map_or(false, |coords| coords.iter().all(|&coord| board.cell(coord).is_selected()))
    }

    /// Whether the free space lies on this line.
    #[must_use]
    pub fn passes_center(self) -> bool {
        self.coords().map_or(false, |coords| coords.contains(&Coord::CENTER))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinLine::Row(row) => write!(f, "row {}", row),
            WinLine::Column(col) => write!(f, "column {}", col),
            WinLine::MainDiagonal => write!(f, "main diagonal"),
            WinLine::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

impl Board {
    /// True if any row, column or diagonal is fully selected.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// The first complete line in evaluation order.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinLine> {
        WinLine::ALL.into_iter().find(|line| line.is_complete(self))
    }

    /// Every complete line, in evaluation order.
    #[must_use]
    pub fn winning_lines(&self) -> SmallVec<[WinLine; 4]> {
        WinLine::ALL.into_iter().filter(|line| line.is_complete(self)).collect()
    }
}

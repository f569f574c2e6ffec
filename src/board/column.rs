//! The five letter columns and their number bands.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Rows and columns per board.
pub const GRID_SIZE: usize = 5;

/// Numbers per column band.
pub const BAND_WIDTH: u8 = 15;

/// Highest number that can be called.
pub const MAX_NUMBER: u8 = 75;

/// A board column. Column `c` owns the numbers `15c+1 ..= 15c+15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    B,
    I,
    N,
    G,
    O,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; GRID_SIZE] = [Column::B, Column::I, Column::N, Column::G, Column::O];

    /// Zero-based position on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Column::B => 'B',
            Column::I => 'I',
            Column::N => 'N',
            Column::G => 'G',
            Column::O => 'O',
        }
    }

    /// Inclusive range of numbers that may appear in this column.
    #[must_use]
    pub fn band(self) -> RangeInclusive<u8> {
        let low = self.index() as u8 * BAND_WIDTH + 1;
        low..=low + BAND_WIDTH - 1
    }

    /// The column a number belongs to, or `None` outside 1..=75.
    #[must_use]
    pub fn for_number(number: u8) -> Option<Self> {
        if number == 0 || number > MAX_NUMBER {
            return None;
        }
        Self::from_index(usize::from((number - 1) / BAND_WIDTH))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Announcement label for a called number, e.g. `O-67`.
#[must_use]
pub fn call_label(number: u8) -> Option<String> {
    Column::for_number(number).map(|column| format!("{}-{}", column, number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(Column::B.band(), 1..=15);
        assert_eq!(Column::I.band(), 16..=30);
        assert_eq!(Column::N.band(), 31..=45);
        assert_eq!(Column::G.band(), 46..=60);
        assert_eq!(Column::O.band(), 61..=75);
    }

    #[test]
    fn test_for_number_edges() {
        assert_eq!(Column::for_number(0), None);
        assert_eq!(Column::for_number(1), Some(Column::B));
        assert_eq!(Column::for_number(15), Some(Column::B));
        assert_eq!(Column::for_number(16), Some(Column::I));
        assert_eq!(Column::for_number(45), Some(Column::N));
        assert_eq!(Column::for_number(46), Some(Column::G));
        assert_eq!(Column::for_number(75), Some(Column::O));
        assert_eq!(Column::for_number(76), None);
    }

    #[test]
    fn test_every_number_lands_in_its_band() {
        for n in 1..=MAX_NUMBER {
            let column = Column::for_number(n).unwrap();
            assert!(column.band().contains(&n));
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
            assert_eq!(Column::from_index(i), Some(*column));
        }
        assert_eq!(Column::from_index(5), None);
    }

    #[test]
    fn test_call_label() {
        assert_eq!(call_label(12).as_deref(), Some("B-12"));
        assert_eq!(call_label(38).as_deref(), Some("N-38"));
        assert_eq!(call_label(67).as_deref(), Some("O-67"));
        assert_eq!(call_label(0), None);
        assert_eq!(call_label(80), None);
    }
}

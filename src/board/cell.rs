//! Board positions and the cells that occupy them.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::column::GRID_SIZE;

/// A validated board position. Both `row` and `col` are in `0..5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// The free space.
    pub const CENTER: Coord = Coord { row: 2, col: 2 };

    /// Build a coordinate from untrusted input.
    ///
    /// Returns `None` if either axis is outside the grid.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Caller guarantees both axes are in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[must_use]
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE as u8).flat_map(|row| (0..GRID_SIZE as u8).map(move |col| Coord::at(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One square on a board.
///
/// `number` is `None` only for the free space. The free space is always
/// called and selected; every other cell starts with both flags clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    number: Option<u8>,
    called: bool,
    selected: bool,
}

impl Cell {
    pub(crate) const FREE: Cell = Cell {
        number: None,
        called: true,
        selected: true,
    };

    pub(crate) const fn numbered(number: u8) -> Self {
        Self {
            number: Some(number),
            called: false,
            selected: false,
        }
    }

    /// The printed number, `None` for the free space.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        self.number
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.number.is_none()
    }

    /// Whether this cell's number has been called (always true when free).
    #[must_use]
    pub const fn is_called(&self) -> bool {
        self.called
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Recompute `called` from a membership test. Selection is untouched.
    pub(crate) fn rederive(&mut self, is_called: impl Fn(u8) -> bool) {
        self.called = match self.number {
            None => true,
            Some(n) => is_called(n),
        };
    }

    pub(crate) fn flip(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }
}

/// Snapshot shape: `{ number, is_free, called, selected }`.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cell", 4)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("is_free", &self.is_free())?;
        state.serialize_field("called", &self.called)?;
        state.serialize_field("selected", &self.selected)?;
        state.end()
    }
}

//! Board model: columns, cells, the 5x5 grid and win lines.
//!
//! ## Layout
//!
//! ```text
//!   B    I    N    G    O
//!  1-15 16-30 31-45 46-60 61-75
//! ```
//!
//! The centre cell (row 2, column 2) is the free space.

pub mod column;
pub mod cell;
pub mod error;
pub mod grid;
pub mod lines;

pub use column::{call_label, Column, BAND_WIDTH, GRID_SIZE, MAX_NUMBER};
pub use cell::{Cell, Coord};
pub use error::{BoardError, SelectError};
pub use grid::Board;
pub use lines::WinLine;

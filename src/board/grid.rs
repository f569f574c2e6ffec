//! The 5x5 board: generation, called-number derivation, selection.
//!
//! A `Board` is a plain `Copy` value. It knows the rules that belong to the
//! grid itself (the free space can't be toggled, uncalled cells can't be
//! toggled). Gating by game status and freezing after a win live in
//! `BoardEngine`.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::cell::{Cell, Coord};
use super::column::{Column, GRID_SIZE};
use super::error::{BoardError, SelectError};
use crate::core::{BoardRng, GenerationMode};

/// A player's grid of 25 cells, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Generate a random board.
    ///
    /// Column `c` draws from `15c+1 ..= 15c+15`. The centre is the free
    /// space, already called and selected.
    pub fn generate(rng: &mut BoardRng, mode: GenerationMode) -> Self {
        let mut cells = [[Cell::FREE; GRID_SIZE]; GRID_SIZE];

        match mode {
            GenerationMode::Loose => {
                for coord in Coord::all().filter(|c| !c.is_center()) {
                    let band = Column::ALL[coord.col()].band();
                    cells[coord.row()][coord.col()] = Cell::numbered(rng.gen_number(band));
                }
            }
            GenerationMode::Distinct => {
                for column in Column::ALL {
                    let rows: Vec<usize> = (0..GRID_SIZE)
                        .filter(|&row| !Coord::at(row as u8, column.index() as u8).is_center())
                        .collect();
                    let numbers = rng.sample_distinct(column.band(), rows.len());
                    for (row, number) in rows.into_iter().zip(numbers) {
                        cells[row][column.index()] = Cell::numbered(number);
                    }
                }
            }
        }

        Self { cells }
    }

    /// Build a board from explicit numbers.
    ///
    /// The centre entry must be `0`; every other entry must sit in its
    /// column's band. Duplicates within a column are allowed.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardError> {
        let mut cells = [[Cell::FREE; GRID_SIZE]; GRID_SIZE];

        for coord in Coord::all() {
            let number = rows[coord.row()][coord.col()];
            if coord.is_center() {
                if number != 0 {
                    return Err(BoardError::CenterNotFree { number });
                }
                continue;
            }

            let column = Column::ALL[coord.col()];
            if !column.band().contains(&number) {
                return Err(BoardError::OutOfBand { row: coord.row(), column, number });
            }
            cells[coord.row()][coord.col()] = Cell::numbered(number);
        }

        Ok(Self { cells })
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.row()][coord.col()]
    }

    /// Look up a cell by raw indices.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        Coord::new(row, col).map(|coord| self.cell(coord))
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        Coord::all().map(move |coord| (coord, self.cell(coord)))
    }

    /// Re-derive every cell's `called` flag from the full called sequence.
    ///
    /// Not incremental: the previous `called` values are discarded.
    /// Duplicates in `called` are harmless. Selection is never touched.
    pub fn derive_called(&mut self, called: &[u8]) {
        let set: FxHashSet<u8> = called.iter().copied().collect();
        self.derive_called_by(|n| set.contains(&n));
    }

    /// Same as `derive_called`, with membership supplied by the caller.
    pub fn derive_called_by(&mut self, is_called: impl Fn(u8) -> bool) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.rederive(&is_called);
            }
        }
    }

    /// Pure form of `derive_called`.
    #[must_use]
    pub fn with_called(mut self, called: &[u8]) -> Self {
        self.derive_called(called);
        self
    }

    /// Flip one cell's selection. Returns the new selected state.
    ///
    /// Rejects the free space and cells whose number is not called.
    pub fn toggle(&mut self, coord: Coord) -> Result<bool, SelectError> {
        let cell = &mut self.cells[coord.row()][coord.col()];
        match cell.number() {
            None => Err(SelectError::FreeCell),
            Some(number) if !cell.is_called() => Err(SelectError::CellNotCalled { number }),
            Some(_) => Ok(cell.flip()),
        }
    }

    /// Number of selected cells, free space included.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_selected()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [[u8; 5]; 5] = [
        [1, 16, 31, 46, 61],
        [2, 17, 32, 47, 62],
        [3, 18, 0, 48, 63],
        [4, 19, 34, 49, 64],
        [5, 20, 35, 50, 65],
    ];

    fn assert_well_formed(board: &Board) {
        for (coord, cell) in board.iter() {
            if coord.is_center() {
                assert!(cell.is_free() && cell.is_called() && cell.is_selected());
            } else {
                let number = cell.number().unwrap();
                assert!(Column::ALL[coord.col()].band().contains(&number));
                assert!(!cell.is_called());
                assert!(!cell.is_selected());
            }
        }
    }

    #[test]
    fn test_generate_loose() {
        let mut rng = BoardRng::new(42);
        for _ in 0..50 {
            assert_well_formed(&Board::generate(&mut rng, GenerationMode::Loose));
        }
    }

    #[test]
    fn test_generate_distinct_has_no_column_duplicates() {
        let mut rng = BoardRng::new(42);
        for _ in 0..50 {
            let board = Board::generate(&mut rng, GenerationMode::Distinct);
            assert_well_formed(&board);

            for col in 0..GRID_SIZE {
                let mut numbers: Vec<u8> =
                    (0..GRID_SIZE).filter_map(|row| board.get(row, col).unwrap().number()).collect();
                let len = numbers.len();
                numbers.sort_unstable();
                numbers.dedup();
                assert_eq!(numbers.len(), len, "duplicate in column {}", col);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = Board::generate(&mut BoardRng::new(9), GenerationMode::Loose);
        let b = Board::generate(&mut BoardRng::new(9), GenerationMode::Loose);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(ROWS).unwrap();
        assert_well_formed(&board);
        assert_eq!(board.get(0, 4).unwrap().number(), Some(61));
        assert!(board.get(2, 2).unwrap().is_free());
        assert!(board.get(5, 0).is_none());
    }

    #[test]
    fn test_from_rows_rejects_out_of_band() {
        let mut rows = ROWS;
        rows[3][1] = 40;
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::OutOfBand { row: 3, column: Column::I, number: 40 })
        );
    }

    #[test]
    fn test_from_rows_rejects_numbered_center() {
        let mut rows = ROWS;
        rows[2][2] = 33;
        assert_eq!(Board::from_rows(rows), Err(BoardError::CenterNotFree { number: 33 }));
    }

    #[test]
    fn test_derive_called() {
        let mut board = Board::from_rows(ROWS).unwrap();
        board.derive_called(&[1, 47, 47, 99]);

        assert!(board.get(0, 0).unwrap().is_called());
        assert!(board.get(1, 3).unwrap().is_called());
        assert!(!board.get(0, 1).unwrap().is_called());
        assert!(board.get(2, 2).unwrap().is_called());
    }

    #[test]
    fn test_derive_called_is_not_additive() {
        let mut board = Board::from_rows(ROWS).unwrap();
        board.derive_called(&[1]);
        board.derive_called(&[2]);

        assert!(!board.get(0, 0).unwrap().is_called());
        assert!(board.get(1, 0).unwrap().is_called());
    }

    #[test]
    fn test_with_called_leaves_original() {
        let board = Board::from_rows(ROWS).unwrap();
        let derived = board.with_called(&[1]);

        assert!(derived.get(0, 0).unwrap().is_called());
        assert!(!board.get(0, 0).unwrap().is_called());
    }

    #[test]
    fn test_toggle() {
        let mut board = Board::from_rows(ROWS).unwrap().with_called(&[1]);
        let coord = Coord::new(0, 0).unwrap();

        assert_eq!(board.toggle(coord), Ok(true));
        assert_eq!(board.toggle(coord), Ok(false));
        assert_eq!(board.selected_count(), 1);
    }

    #[test]
    fn test_toggle_rejections() {
        let mut board = Board::from_rows(ROWS).unwrap();
        let before = board;

        assert_eq!(board.toggle(Coord::CENTER), Err(SelectError::FreeCell));
        assert_eq!(
            board.toggle(Coord::new(0, 1).unwrap()),
            Err(SelectError::CellNotCalled { number: 16 })
        );
        assert_eq!(board, before);
    }
}

use std::fmt;

use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// A single cell: empty, or occupied by one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A gravity-aware grid. Row 0 is the top; pieces stack from the highest row
/// index upward, so within any column the occupied cells form a contiguous
/// block ending at the bottom.
///
/// The board is a value type: search clones it for every hypothetical move,
/// so an ancestor's state is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// The standard 6x7 board.
    pub fn standard() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// One column, top to bottom.
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// All columns with at least one empty cell, in ascending order.
    /// Empty exactly when the board is full (a tie, absent a win).
    pub fn available_actions(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let mark = match self.get(row, col) {
                    Cell::Empty => '0',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                write!(f, "{}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_drop_piece_single_row_board() {
        let mut board = Board::new(1, 4);
        let row = board.drop_piece(2, Cell::One).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 2), Cell::One);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..board.rows() {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Cell::Two),
            Err(MoveError::ColumnFull(0))
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, Cell::One),
            Err(MoveError::InvalidColumn(7))
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_actions().is_empty());
    }

    #[test]
    fn test_available_actions_ascending() {
        let mut board = Board::standard();
        // Fill columns 1 and 4
        for _ in 0..board.rows() {
            board.drop_piece(1, Cell::One).unwrap();
            board.drop_piece(4, Cell::Two).unwrap();
        }
        assert_eq!(board.available_actions(), vec![0, 2, 3, 5, 6]);
    }

    #[test]
    fn test_drop_preserves_contiguity() {
        let mut board = Board::standard();
        let moves = [3, 3, 0, 6, 3, 0, 2];
        for (i, &col) in moves.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::One } else { Cell::Two };
            let before: usize = (0..board.rows())
                .filter(|&r| board.get(r, col) != Cell::Empty)
                .count();
            board.drop_piece(col, cell).unwrap();
            let after: usize = (0..board.rows())
                .filter(|&r| board.get(r, col) != Cell::Empty)
                .count();
            assert_eq!(after, before + 1);

            // Occupied cells form a contiguous block ending at the bottom row
            for c in 0..board.cols() {
                let col_cells = board.column(c);
                let first_occupied = col_cells
                    .iter()
                    .position(|&cell| cell != Cell::Empty)
                    .unwrap_or(board.rows());
                assert!(
                    col_cells[first_occupied..]
                        .iter()
                        .all(|&cell| cell != Cell::Empty),
                    "column {} has a floating piece or gap",
                    c
                );
            }
        }
    }

    #[test]
    fn test_arbitrary_dimensions() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.available_actions(), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            board.drop_piece(5, Cell::One),
            Err(MoveError::InvalidColumn(5))
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 3);
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        assert_eq!(board.to_string(), "0 0 0\n1 0 2\n");
    }
}

//! Positional evaluation used at search depth cutoffs.

use crate::config::EvalConfig;
use crate::game::{Board, Cell};

/// Trait for scoring a non-terminal board. Larger is better for Player One,
/// the maximizing side.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// One element of a kernel: a cell owned by the scanned player, or a cell
/// that must be empty.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Own,
    Gap,
}

use Slot::{Gap, Own};

const PAIR: &[Slot] = &[Own, Own];
const TRIPLE: &[Slot] = &[Own, Own, Own];
const SPLIT_HIGH: &[Slot] = &[Own, Own, Gap, Own]; // PP_P
const SPLIT_LOW: &[Slot] = &[Own, Gap, Own, Own]; // P_PP

/// Scores every row and every column (the rows of the transpose) by kernel
/// presence. Each kernel contributes its weight at most once per line, and a
/// containing shape also matches its sub-shapes: a triple fires the pair
/// kernel too. Diagonals are not scanned.
pub struct KernelHeuristic {
    weights: EvalConfig,
}

impl KernelHeuristic {
    pub fn new(weights: EvalConfig) -> Self {
        KernelHeuristic { weights }
    }

    fn kernels(&self) -> [(&'static [Slot], i64); 4] {
        [
            (PAIR, self.weights.pair_weight),
            (TRIPLE, self.weights.triple_weight),
            (SPLIT_HIGH, self.weights.split_weight),
            (SPLIT_LOW, self.weights.split_weight),
        ]
    }

    /// Weighted kernel presence for one line: One's total minus Two's.
    fn line_score(&self, line: &[Cell]) -> i64 {
        let mut score = 0;
        for (kernel, weight) in self.kernels() {
            if contains_kernel(line, Cell::One, kernel) {
                score += weight;
            }
            if contains_kernel(line, Cell::Two, kernel) {
                score -= weight;
            }
        }
        score
    }

    fn rows_score(&self, board: &Board) -> i64 {
        (0..board.rows())
            .map(|row| self.line_score(board.row(row)))
            .sum()
    }

    fn cols_score(&self, board: &Board) -> i64 {
        (0..board.cols())
            .map(|col| self.line_score(&board.column(col)))
            .sum()
    }
}

impl Heuristic for KernelHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let rows = self.rows_score(board);
        let cols = self.cols_score(board);
        // Truncating average of the two scans
        ((rows + cols) / 2) as f64
    }
}

fn contains_kernel(line: &[Cell], own: Cell, kernel: &[Slot]) -> bool {
    if line.len() < kernel.len() {
        return false;
    }
    line.windows(kernel.len()).any(|window| {
        window.iter().zip(kernel).all(|(&cell, &slot)| match slot {
            Own => cell == own,
            Gap => cell == Cell::Empty,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> KernelHeuristic {
        KernelHeuristic::new(EvalConfig::default())
    }

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::standard();
        assert_eq!(heuristic().evaluate(&board), 0.0);
    }

    #[test]
    fn test_single_piece_is_zero() {
        let mut board = Board::standard();
        board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(heuristic().evaluate(&board), 0.0);
    }

    #[test]
    fn test_horizontal_triple() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        // Row scan: pair (1) + triple (100) = 101; columns contribute
        // nothing. Truncating average: 101 / 2 = 50.
        assert_eq!(heuristic().evaluate(&board), 50.0);
    }

    #[test]
    fn test_vertical_triple() {
        let mut board = Board::standard();
        for _ in 0..3 {
            board.drop_piece(0, Cell::One).unwrap();
        }
        // Column scan: pair + triple = 101; rows contribute nothing.
        assert_eq!(heuristic().evaluate(&board), 50.0);
    }

    #[test]
    fn test_split_triple() {
        let mut board = Board::standard();
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::One).unwrap();
        board.drop_piece(3, Cell::One).unwrap();
        // Bottom row 1 1 0 1: pair (1) + PP_P (100) = 101.
        assert_eq!(heuristic().evaluate(&board), 50.0);
    }

    #[test]
    fn test_opponent_kernels_subtract() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Cell::Two).unwrap();
        }
        // Mirror of the triple case: -101 / 2 truncates to -50.
        assert_eq!(heuristic().evaluate(&board), -50.0);
    }

    #[test]
    fn test_lone_pair_truncates_to_zero() {
        let mut board = Board::standard();
        board.drop_piece(0, Cell::Two).unwrap();
        board.drop_piece(1, Cell::Two).unwrap();
        // -1 / 2 truncates toward zero.
        assert_eq!(heuristic().evaluate(&board), 0.0);
    }

    #[test]
    fn test_kernel_counts_once_per_line() {
        let mut board = Board::standard();
        // Two disjoint pairs in the same row still count the pair kernel once
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::One).unwrap();
        board.drop_piece(4, Cell::One).unwrap();
        board.drop_piece(5, Cell::One).unwrap();
        assert_eq!(heuristic().evaluate(&board), 0.0); // 1 / 2 truncated
    }

    #[test]
    fn test_diagonals_are_not_scored() {
        let mut board = Board::standard();
        // "/" staircase of three One pieces with no shared row or column runs
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();
        // One's diagonal threat is invisible; only Two's pieces form kernels:
        // row 5 has 0 2 2 (pair, -1), column 2 has a Two pair (-1).
        // rows = -1, cols = -1, average = -1.
        assert_eq!(heuristic().evaluate(&board), -1.0);
    }

    #[test]
    fn test_custom_weights() {
        let weights = EvalConfig {
            pair_weight: 2,
            triple_weight: 10,
            split_weight: 10,
        };
        let h = KernelHeuristic::new(weights);
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        // pair (2) + triple (10) = 12; 12 / 2 = 6.
        assert_eq!(h.evaluate(&board), 6.0);
    }
}

//! Win detection: four or more consecutive cells for one player along a
//! row, a column, or either diagonal direction.

use super::board::{Board, Cell};
use super::player::Player;

const WIN_LENGTH: usize = 4;

/// True iff `player` has a run of at least four consecutive cells along a
/// row, a column, or either diagonal direction.
pub fn is_won(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    has_horizontal_run(board, cell)
        || has_vertical_run(board, cell)
        || has_diagonal_run(board, cell)
}

/// The winning player, if any. Player One is checked first, so a board where
/// both sides somehow hold a run resolves to One. A full board with no
/// winner is a tie, which is signaled by the caller, not here.
pub fn winner(board: &Board) -> Option<Player> {
    if is_won(board, Player::One) {
        Some(Player::One)
    } else if is_won(board, Player::Two) {
        Some(Player::Two)
    } else {
        None
    }
}

fn has_horizontal_run(board: &Board, cell: Cell) -> bool {
    for row in 0..board.rows() {
        let mut run = 0;
        for col in 0..board.cols() {
            if board.get(row, col) == cell {
                run += 1;
                if run >= WIN_LENGTH {
                    return true;
                }
            } else {
                run = 0;
            }
        }
    }
    false
}

fn has_vertical_run(board: &Board, cell: Cell) -> bool {
    for col in 0..board.cols() {
        let mut run = 0;
        for row in 0..board.rows() {
            if board.get(row, col) == cell {
                run += 1;
                if run >= WIN_LENGTH {
                    return true;
                }
            } else {
                run = 0;
            }
        }
    }
    false
}

/// Walks every diagonal in both orientations, including all off-diagonals.
/// Diagonals shorter than four cells can never satisfy the run check.
fn has_diagonal_run(board: &Board, cell: Cell) -> bool {
    let rows = board.rows();
    let cols = board.cols();

    // "\" diagonals start on the top row or the left column
    let mut starts: Vec<(usize, usize)> = (0..cols).map(|col| (0, col)).collect();
    starts.extend((1..rows).map(|row| (row, 0)));
    for &(row0, col0) in &starts {
        let mut run = 0;
        let mut row = row0;
        let mut col = col0;
        while row < rows && col < cols {
            if board.get(row, col) == cell {
                run += 1;
                if run >= WIN_LENGTH {
                    return true;
                }
            } else {
                run = 0;
            }
            row += 1;
            col += 1;
        }
    }

    // "/" diagonals start on the top row or the right column
    let mut starts: Vec<(usize, usize)> = (0..cols).map(|col| (0, col)).collect();
    starts.extend((1..rows).map(|row| (row, cols - 1)));
    for &(row0, col0) in &starts {
        let mut run = 0;
        let mut row = row0;
        let mut col = col0 as i64;
        while row < rows && col >= 0 {
            if board.get(row, col as usize) == cell {
                run += 1;
                if run >= WIN_LENGTH {
                    return true;
                }
            } else {
                run = 0;
            }
            row += 1;
            col -= 1;
        }
    }

    false
}

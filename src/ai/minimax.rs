//! Depth-limited alpha-beta minimax.

use crate::config::{DepthPolicy, EngineConfig};
use crate::game::{winner, Board, Player};

use super::heuristic::{Heuristic, KernelHeuristic};

/// Per-column search values. `None` marks a column that was never explored
/// (full, or cut off by pruning); `Some(0.0)` is a genuine zero evaluation.
pub type ColumnValues = Vec<Option<f64>>;

/// Alpha-beta minimax over board copies. Player One is always the
/// maximizing side: root moves are applied as One, replies as Two.
pub struct MinimaxSearch {
    heuristic: Box<dyn Heuristic>,
    depth: DepthPolicy,
    terminal_utility: f64,
}

impl MinimaxSearch {
    pub fn new(config: &EngineConfig) -> Self {
        MinimaxSearch {
            heuristic: Box::new(KernelHeuristic::new(config.eval.clone())),
            depth: config.search.depth.clone(),
            terminal_utility: config.search.terminal_utility,
        }
    }

    /// Search to a fixed depth instead of the action-count table.
    pub fn with_depth(config: &EngineConfig, depth: usize) -> Self {
        MinimaxSearch {
            depth: DepthPolicy::fixed(depth),
            ..Self::new(config)
        }
    }

    pub fn with_heuristic(config: &EngineConfig, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch {
            heuristic,
            ..Self::new(config)
        }
    }

    /// Run `max_value` at the root over the full window and pick the
    /// highest-valued column, ties going to the lowest index.
    pub fn choose_move(&self, board: &Board) -> usize {
        let actions = board.available_actions();
        assert!(!actions.is_empty(), "No legal actions available");

        let depth = self.depth.depth_for(actions.len());
        let (_, values) = self.max_value(board, f64::NEG_INFINITY, f64::INFINITY, depth);
        pick_best(&actions, &values)
    }

    /// Maximizing node. Returns the node value together with the value
    /// recorded for each explored column.
    pub fn max_value(
        &self,
        board: &Board,
        mut alpha: f64,
        beta: f64,
        depth: usize,
    ) -> (f64, ColumnValues) {
        let mut values: ColumnValues = vec![None; board.cols()];

        if let Some(winner) = winner(board) {
            return (self.utility(winner), values);
        }
        let actions = board.available_actions();
        if actions.is_empty() {
            return (0.0, values); // tie
        }
        if depth == 0 {
            return (self.heuristic.evaluate(board), values);
        }

        let mut v = f64::NEG_INFINITY;
        for action in actions {
            let mut next = board.clone();
            next.drop_piece(action, Player::One.to_cell()).unwrap();
            let child = self.min_value(&next, alpha, beta, depth - 1);
            values[action] = Some(child);
            v = v.max(child);
            if v >= beta {
                return (v, values);
            }
            alpha = alpha.max(v);
        }
        (v, values)
    }

    /// Minimizing node: applies moves as Player Two.
    fn min_value(&self, board: &Board, alpha: f64, mut beta: f64, depth: usize) -> f64 {
        if let Some(winner) = winner(board) {
            return self.utility(winner);
        }
        let actions = board.available_actions();
        if actions.is_empty() {
            return 0.0; // tie
        }
        if depth == 0 {
            return self.heuristic.evaluate(board);
        }

        let mut v = f64::INFINITY;
        for action in actions {
            let mut next = board.clone();
            next.drop_piece(action, Player::Two.to_cell()).unwrap();
            let (child, _) = self.max_value(&next, alpha, beta, depth - 1);
            v = v.min(child);
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }

    fn utility(&self, winner: Player) -> f64 {
        match winner {
            Player::One => self.terminal_utility,
            Player::Two => -self.terminal_utility,
        }
    }
}

/// Highest-valued explored action; ties break to the lowest column index.
/// Falls back to the first legal action when nothing was explored (the root
/// was already terminal, tied, or cut off at depth zero).
pub(crate) fn pick_best(actions: &[usize], values: &ColumnValues) -> usize {
    let mut best = actions[0];
    let mut best_value = f64::NEG_INFINITY;
    for &action in actions {
        if let Some(value) = values[action] {
            if value > best_value {
                best_value = value;
                best = action;
            }
        }
    }
    best
}

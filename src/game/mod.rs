//! Core Connect Four game logic: board representation, player identities,
//! win detection, and the game state machine with immutable transitions.

mod board;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use rules::{is_won, winner};
pub use state::{GameOutcome, GameState};

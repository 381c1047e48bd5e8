//! Player strategies and the game-tree search engines.

mod agent;
pub mod expectimax;
pub mod heuristic;
mod human;
pub mod minimax;
mod random;

pub use agent::{Agent, AiAgent};
pub use expectimax::ExpectimaxSearch;
pub use heuristic::{Heuristic, KernelHeuristic};
pub use human::HumanAgent;
pub use minimax::{ColumnValues, MinimaxSearch};
pub use random::RandomAgent;

use crate::config::EngineConfig;
use crate::game::GameState;

use super::expectimax::ExpectimaxSearch;
use super::minimax::MinimaxSearch;

/// Universal interface for all player strategies.
pub trait Agent {
    /// Select an action (column) given the current game state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

enum Search {
    Minimax(MinimaxSearch),
    Expectimax(ExpectimaxSearch),
}

/// The AI player: delegates move choice to one of the search engines.
/// Both engines search from Player One's perspective as the maximizer,
/// whichever seat this agent occupies.
pub struct AiAgent {
    search: Search,
}

impl AiAgent {
    /// Alpha-beta minimax with the configured depth table.
    pub fn minimax(config: &EngineConfig) -> Self {
        AiAgent {
            search: Search::Minimax(MinimaxSearch::new(config)),
        }
    }

    /// Alpha-beta minimax at a fixed depth.
    pub fn minimax_with_depth(config: &EngineConfig, depth: usize) -> Self {
        AiAgent {
            search: Search::Minimax(MinimaxSearch::with_depth(config, depth)),
        }
    }

    /// Expectimax with the configured depth table.
    pub fn expectimax(config: &EngineConfig) -> Self {
        AiAgent {
            search: Search::Expectimax(ExpectimaxSearch::new(config)),
        }
    }

    /// Expectimax at a fixed depth.
    pub fn expectimax_with_depth(config: &EngineConfig, depth: usize) -> Self {
        AiAgent {
            search: Search::Expectimax(ExpectimaxSearch::with_depth(config, depth)),
        }
    }
}

impl Agent for AiAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        match &self.search {
            Search::Minimax(search) => search.choose_move(state.board()),
            Search::Expectimax(search) => search.choose_move(state.board()),
        }
    }

    fn name(&self) -> &str {
        match &self.search {
            Search::Minimax(_) => "Minimax",
            Search::Expectimax(_) => "Expectimax",
        }
    }
}

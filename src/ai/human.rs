use std::io::{self, BufRead, BufReader, Stdin, Write};

use crate::game::GameState;

use super::agent::Agent;

/// An agent that reads column choices from an input source, re-prompting
/// until it receives a legal column. Invalid input never propagates past
/// the prompt loop.
pub struct HumanAgent<R: BufRead> {
    input: R,
}

impl HumanAgent<BufReader<Stdin>> {
    /// Read moves from standard input.
    pub fn new() -> Self {
        HumanAgent {
            input: BufReader::new(io::stdin()),
        }
    }
}

impl Default for HumanAgent<BufReader<Stdin>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> HumanAgent<R> {
    /// Read moves from an arbitrary source.
    pub fn from_reader(input: R) -> Self {
        HumanAgent { input }
    }
}

impl<R: BufRead> Agent for HumanAgent<R> {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        print!("Enter your move: ");
        io::stdout().flush().expect("failed to flush stdout");

        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .expect("failed to read move input");
            assert!(read > 0, "input closed before a move was entered");

            match line.trim().parse::<usize>() {
                Ok(column) if legal.contains(&column) => return column,
                _ => {
                    print!("Column full or invalid, choose from {:?}: ", legal);
                    io::stdout().flush().expect("failed to flush stdout");
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_valid_column() {
        let state = GameState::standard();
        let mut agent = HumanAgent::from_reader(Cursor::new("3\n"));
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn test_reprompts_on_junk_input() {
        let state = GameState::standard();
        let mut agent = HumanAgent::from_reader(Cursor::new("abc\n-1\n99\n4\n"));
        assert_eq!(agent.select_action(&state), 4);
    }

    #[test]
    fn test_reprompts_on_full_column() {
        let mut state = GameState::standard();
        for _ in 0..3 {
            state = state.apply_move(0).unwrap();
            state = state.apply_move(0).unwrap();
        }
        let mut agent = HumanAgent::from_reader(Cursor::new("0\n1\n"));
        assert_eq!(agent.select_action(&state), 1);
    }

    #[test]
    fn test_name() {
        let agent = HumanAgent::from_reader(Cursor::new(""));
        assert_eq!(agent.name(), "Human");
    }
}

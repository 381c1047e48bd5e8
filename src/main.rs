use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_ai::ai::{Agent, AiAgent, HumanAgent, RandomAgent};
use connect_four_ai::config::EngineConfig;
use connect_four_ai::game::{GameOutcome, GameState, Player};

/// Play Connect Four against the search engine.
#[derive(Parser)]
#[command(name = "play", about = "Play Connect Four against the search engine")]
struct Cli {
    /// Strategy for Player 1: ai, random, or human
    #[arg(long, default_value = "ai")]
    player1: String,

    /// Strategy for Player 2: ai, random, or human
    #[arg(long, default_value = "human")]
    player2: String,

    /// Search used by AI players: minimax or expectimax
    #[arg(long, default_value = "minimax")]
    search: String,

    /// Fixed search depth, overriding the configured depth table
    #[arg(long)]
    depth: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Board rows
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 7)]
    cols: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.rows == 0 || cli.cols == 0 {
        bail!("board dimensions must be positive");
    }
    if cli.depth == Some(0) {
        bail!("--depth must be >= 1");
    }

    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut player1 = build_agent(&cli.player1, &cli, &config)?;
    let mut player2 = build_agent(&cli.player2, &cli, &config)?;

    let mut state = GameState::new(cli.rows, cli.cols);
    println!(
        "{} ({}) vs {} ({})",
        Player::One.name(),
        player1.name(),
        Player::Two.name(),
        player2.name()
    );
    println!("{}", state.board());

    while !state.is_terminal() {
        let mover = state.current_player();
        let agent = match mover {
            Player::One => &mut player1,
            Player::Two => &mut player2,
        };
        let column = agent.select_action(&state);
        println!("{} ({}) plays column {}", mover.name(), agent.name(), column);
        state = state.apply_move(column)?;
        println!("{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("The game is a tie."),
        None => unreachable!("terminal state must have an outcome"),
    }

    Ok(())
}

fn build_agent(kind: &str, cli: &Cli, config: &EngineConfig) -> Result<Box<dyn Agent>> {
    match kind {
        "ai" => match cli.search.as_str() {
            "minimax" => Ok(Box::new(match cli.depth {
                Some(depth) => AiAgent::minimax_with_depth(config, depth),
                None => AiAgent::minimax(config),
            })),
            "expectimax" => Ok(Box::new(match cli.depth {
                Some(depth) => AiAgent::expectimax_with_depth(config, depth),
                None => AiAgent::expectimax(config),
            })),
            other => bail!(
                "unknown search '{}' (expected 'minimax' or 'expectimax')",
                other
            ),
        },
        "random" => Ok(Box::new(RandomAgent::new())),
        "human" => Ok(Box::new(HumanAgent::new())),
        other => bail!(
            "unknown player type '{}' (expected 'ai', 'random', or 'human')",
            other
        ),
    }
}

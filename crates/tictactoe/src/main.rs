//! Tic-tac-toe CLI
//!
//! Thin driver over the rules engine: replays moves given on the command
//! line and evaluates boards.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use game_rules::GameRules;
use tictactoe::{
    Board, RulesConfig, TicTacToeMove, TicTacToeRules, TicTacToeState, winning_line,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            json,
            tiles,
        } => {
            let config = match config {
                Some(path) => RulesConfig::from_file(path)?,
                None => RulesConfig::default(),
            };
            play(TicTacToeRules::with_config(config), &tiles, json)
        }
        Command::Outcome { board, json } => outcome(board, json),
    }
}

/// Plays `tiles` in order and prints every result.
#[instrument(skip(rules))]
fn play(rules: TicTacToeRules, tiles: &[usize], json: bool) -> Result<()> {
    let mut state = rules.init_state();

    for (index, &tile) in tiles.iter().enumerate() {
        let action = TicTacToeMove::new(tile, state.player_turn);
        let result = rules.on_move(&state, &action);

        if json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!("{}. {}: {}", index + 1, action, result);
        }

        if let Some(reason) = result.reason() {
            bail!("move {} ({}) rejected: {}", index + 1, action, reason);
        }
        if let Some(next) = result.into_state() {
            state = next;
        }
        if !json {
            println!("{}\n", state.board.grid());
        }
    }

    let final_outcome = rules.get_outcome(&state);
    info!(moves = tiles.len(), outcome = %final_outcome, "Game replayed");
    if json {
        println!("{}", serde_json::to_string(&final_outcome)?);
    } else {
        println!("outcome: {}", final_outcome);
    }
    Ok(())
}

/// Prints the outcome of `board` and the line that decided it.
#[instrument]
fn outcome(board: Board, json: bool) -> Result<()> {
    let rules = TicTacToeRules::new();
    // The player to move does not affect the outcome.
    let state = TicTacToeState::new(board, rules.init_state().player_turn);
    let result = rules.get_outcome(&state);
    let line = winning_line(&board);

    if json {
        println!(
            "{}",
            serde_json::json!({ "outcome": result, "line": line })
        );
    } else {
        println!("{}\n", board.grid());
        match line {
            Some(line) => println!("outcome: {} ({})", result, line),
            None => println!("outcome: {}", result),
        }
    }
    Ok(())
}

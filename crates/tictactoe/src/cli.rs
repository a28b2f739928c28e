//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Board;

/// Tic-tac-toe rules engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Replay and evaluate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tiles in order, each claimed by the player whose turn it is
    Play {
        /// Path to a rules config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print each result as JSON instead of a grid
        #[arg(long)]
        json: bool,

        /// Tile indices (0-8, row-major)
        tiles: Vec<usize>,
    },

    /// Evaluate the outcome of a board such as "xox.o...."
    Outcome {
        /// Board in compact notation: x, o, and . for empty; / between rows is ignored
        board: Board,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

//! Tic-tac-toe rules engine.
//!
//! A pure implementation of the [`game_rules::GameRules`] contract for the
//! classic 3x3 game: build the initial state, validate and apply moves, and
//! classify the outcome of any state.
//!
//! # Example
//!
//! ```
//! use game_rules::{GameRules, MoveResultKind};
//! use tictactoe::{PlayerMarker, TicTacToeMove, TicTacToeRules};
//!
//! let rules = TicTacToeRules::new();
//! let state = rules.init_state();
//! let result = rules.on_move(&state, &TicTacToeMove::new(4, PlayerMarker::X));
//! assert_eq!(result.kind(), MoveResultKind::MadeMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod messages;
mod rules;
mod types;

pub use config::{ConfigError, RulesConfig};
pub use messages::{game_already_over_message, out_of_turn_message, tile_already_occupied_message};
pub use rules::{TicTacToeRules, WinningLine, check_winner, is_draw, is_full, winning_line};
pub use types::{
    Board, BoardParseError, PlayerMarker, Square, TILE_COUNT, TicTacToeMove, TicTacToeState,
};

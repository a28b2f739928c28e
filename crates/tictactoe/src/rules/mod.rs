//! Game rules for tic-tac-toe.
//!
//! Win and draw detection are pure functions over a [`Board`]; the
//! [`TicTacToeRules`] engine composes them into the [`GameRules`] contract.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};

use crate::messages::{game_already_over_message, out_of_turn_message, tile_already_occupied_message};
use crate::{Board, PlayerMarker, RulesConfig, Square, TicTacToeMove, TicTacToeState};
use game_rules::{
    GameRules, MoveResult, Outcome, invalid_move, made_move, move_ended_game, tie, unfinished,
    winner,
};
use tracing::{debug, instrument};

/// Tic-tac-toe rules engine.
///
/// Stateless apart from its configuration: every operation is a pure
/// function of its arguments, so one engine can serve any number of games
/// and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToeRules {
    config: RulesConfig,
}

impl TicTacToeRules {
    /// Creates an engine with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl GameRules<TicTacToeState, TicTacToeMove> for TicTacToeRules {
    type Player = PlayerMarker;

    #[instrument(skip(self))]
    fn init_state(&self) -> TicTacToeState {
        TicTacToeState::new(Board::new(), *self.config.first_player())
    }

    #[instrument(skip(self, state))]
    fn is_valid_move(&self, state: &TicTacToeState, action: &TicTacToeMove) -> bool {
        state.board.is_empty(action.tile)
    }

    #[instrument(skip(self, state), fields(turn = %state.player_turn))]
    fn on_move(&self, state: &TicTacToeState, action: &TicTacToeMove) -> MoveResult<TicTacToeState> {
        if *self.config.lock_finished_games() && self.get_outcome(state).is_terminal() {
            debug!("Rejected move on finished game");
            return invalid_move(game_already_over_message());
        }

        if action.owner != state.player_turn {
            debug!(mover = %action.owner, "Rejected out-of-turn move");
            return invalid_move(out_of_turn_message(state.player_turn, action.owner));
        }

        if !self.is_valid_move(state, action) {
            debug!(tile = action.tile, "Rejected move on unavailable tile");
            return invalid_move(tile_already_occupied_message(action.tile));
        }

        let next = TicTacToeState::new(
            state
                .board
                .with_square(action.tile, Square::Occupied(action.owner)),
            state.player_turn.opponent(),
        );

        match self.get_outcome(&next) {
            Outcome::Tie | Outcome::Winner { .. } => {
                debug!(board = %next.board, "Move ended game");
                move_ended_game(next)
            }
            Outcome::Unfinished => made_move(next),
            other => unreachable!("unhandled outcome kind {:?}", other.kind()),
        }
    }

    #[instrument(skip(self), fields(board = %state.board))]
    fn get_outcome(&self, state: &TicTacToeState) -> Outcome<PlayerMarker> {
        if let Some(player) = check_winner(&state.board) {
            winner(player)
        } else if is_full(&state.board) {
            tie()
        } else {
            unfinished()
        }
    }
}

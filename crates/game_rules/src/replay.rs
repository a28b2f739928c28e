//! Driving a rules engine through a sequence of moves.

use crate::{GameRules, MoveResult, Outcome};
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// A game replayed from its initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay<S, P> {
    /// State after the last applied move.
    pub state: S,
    /// Outcome of the final state.
    pub outcome: Outcome<P>,
    /// Number of moves applied.
    pub moves_applied: usize,
}

/// Reasons a replay stops early.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// The rules rejected the move at `index`.
    #[display("move {} rejected: {}", index, reason)]
    InvalidMove {
        /// Zero-based position of the rejected move.
        index: usize,
        /// Rejection reason reported by the rules.
        reason: String,
    },
    /// A move followed the move that ended the game.
    #[display("move {} supplied after the game ended", index)]
    MovesAfterGameOver {
        /// Zero-based position of the first extra move.
        index: usize,
    },
}

/// Replays `moves` from the initial state of `rules`.
///
/// Stops with an error at the first rejected move, or at the first move
/// supplied after one that ended the game.
#[instrument(skip_all)]
pub fn replay<R, S, M, I>(rules: &R, moves: I) -> Result<Replay<S, R::Player>, ReplayError>
where
    R: GameRules<S, M>,
    I: IntoIterator<Item = M>,
{
    let mut state = rules.init_state();
    let mut ended = false;
    let mut moves_applied = 0;

    for (index, action) in moves.into_iter().enumerate() {
        if ended {
            warn!(index, "Move supplied after game over");
            return Err(ReplayError::MovesAfterGameOver { index });
        }

        match rules.on_move(&state, &action) {
            MoveResult::MadeMove { state: next } => state = next,
            MoveResult::MoveEndedGame { state: next } => {
                state = next;
                ended = true;
            }
            MoveResult::InvalidMove { reason } => {
                warn!(index, %reason, "Replay stopped on invalid move");
                return Err(ReplayError::InvalidMove { index, reason });
            }
        }
        moves_applied += 1;
    }

    let outcome = rules.get_outcome(&state);
    debug!(moves_applied, ended, "Replay finished");

    Ok(Replay {
        state,
        outcome,
        moves_applied,
    })
}

//! Result variants for applying a move.

use serde::{Deserialize, Serialize};
use strum::EnumDiscriminants;
use tracing::instrument;

/// Result of applying a move to a state.
///
/// Rule violations are reported as `InvalidMove` values, never as errors.
/// Accepted moves carry the successor state, tagged by whether it ended the
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum_discriminants(name(MoveResultKind), derive(Hash, strum::EnumIter))]
#[non_exhaustive]
pub enum MoveResult<S> {
    /// The move was accepted and the game continues.
    MadeMove {
        /// Successor state.
        state: S,
    },
    /// The move was accepted and ended the game.
    MoveEndedGame {
        /// Successor state.
        state: S,
    },
    /// The move was rejected.
    InvalidMove {
        /// Human-readable rejection reason.
        reason: String,
    },
}

impl<S> MoveResult<S> {
    /// Returns the discriminant of this result.
    pub fn kind(&self) -> MoveResultKind {
        MoveResultKind::from(self)
    }

    /// Returns the successor state of an accepted move.
    pub fn state(&self) -> Option<&S> {
        match self {
            MoveResult::MadeMove { state } | MoveResult::MoveEndedGame { state } => Some(state),
            MoveResult::InvalidMove { .. } => None,
        }
    }

    /// Consumes the result, returning the successor state of an accepted move.
    pub fn into_state(self) -> Option<S> {
        match self {
            MoveResult::MadeMove { state } | MoveResult::MoveEndedGame { state } => Some(state),
            MoveResult::InvalidMove { .. } => None,
        }
    }

    /// Returns the rejection reason of an invalid move.
    pub fn reason(&self) -> Option<&str> {
        match self {
            MoveResult::InvalidMove { reason } => Some(reason.as_str()),
            MoveResult::MadeMove { .. } | MoveResult::MoveEndedGame { .. } => None,
        }
    }

    /// Returns true if the move was accepted and ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveResult::MoveEndedGame { .. })
    }
}

impl<S> std::fmt::Display for MoveResult<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::MadeMove { .. } => write!(f, "made move"),
            MoveResult::MoveEndedGame { .. } => write!(f, "move ended game"),
            MoveResult::InvalidMove { reason } => write!(f, "invalid move: {}", reason),
        }
    }
}

/// Result of an accepted move that leaves the game unfinished.
#[instrument(skip(state))]
pub fn made_move<S>(state: S) -> MoveResult<S> {
    MoveResult::MadeMove { state }
}

/// Result of an accepted move that ends the game.
#[instrument(skip(state))]
pub fn move_ended_game<S>(state: S) -> MoveResult<S> {
    MoveResult::MoveEndedGame { state }
}

/// Result of a rejected move.
#[instrument(skip(reason))]
pub fn invalid_move<S>(reason: impl Into<String>) -> MoveResult<S> {
    MoveResult::InvalidMove {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_results_carry_state() {
        assert_eq!(made_move(3).state(), Some(&3));
        assert_eq!(move_ended_game(4).into_state(), Some(4));
        assert_eq!(invalid_move::<u8>("nope").state(), None);
    }

    #[test]
    fn test_reason_only_on_invalid() {
        assert_eq!(invalid_move::<u8>("nope").reason(), Some("nope"));
        assert_eq!(made_move(1).reason(), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(made_move(0).kind(), MoveResultKind::MadeMove);
        assert_eq!(move_ended_game(0).kind(), MoveResultKind::MoveEndedGame);
        assert_eq!(invalid_move::<u8>("x").kind(), MoveResultKind::InvalidMove);
        assert!(move_ended_game(0).is_game_over());
        assert!(!made_move(0).is_game_over());
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let json = serde_json::to_value(invalid_move::<u8>("Tile 0 is already occupied.")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "invalidMove", "reason": "Tile 0 is already occupied." })
        );

        let json = serde_json::to_value(made_move(7u8)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "madeMove", "state": 7 }));
    }
}

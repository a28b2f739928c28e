//! The rules trait implemented by concrete games.

use crate::{MoveResult, Outcome};

/// Rules of a deterministic turn-based game over state `S` and move `M`.
///
/// Implementations are pure: every operation depends only on its arguments
/// and returns a fresh value, so a single rules value can be shared across
/// threads and called concurrently.
pub trait GameRules<S, M> {
    /// Identifier for the players of this game.
    type Player;

    /// Builds the state a new game starts from.
    fn init_state(&self) -> S;

    /// Returns true if `action` may be placed on `state`, ignoring whose turn it is.
    fn is_valid_move(&self, state: &S, action: &M) -> bool;

    /// Applies `action` to `state`, producing a successor or a rejection.
    fn on_move(&self, state: &S, action: &M) -> MoveResult<S>;

    /// Classifies `state`.
    fn get_outcome(&self, state: &S) -> Outcome<Self::Player>;
}

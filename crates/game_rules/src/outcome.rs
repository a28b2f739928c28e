//! Outcome variants for a game state.

use serde::{Deserialize, Serialize};
use strum::EnumDiscriminants;
use tracing::instrument;

/// Classification of a game state.
///
/// `Unfinished` is the only non-terminal variant. Outcomes are derived from
/// a state on demand and never stored alongside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumDiscriminants,
)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum_discriminants(name(OutcomeKind), derive(Hash, strum::EnumIter))]
#[non_exhaustive]
pub enum Outcome<P> {
    /// The game can continue.
    Unfinished,
    /// The game ended with no winner.
    Tie,
    /// The game ended and `player_id` won.
    Winner {
        /// The winning player.
        player_id: P,
    },
}

impl<P> Outcome<P> {
    /// Returns the discriminant of this outcome.
    pub fn kind(&self) -> OutcomeKind {
        OutcomeKind::from(self)
    }

    /// Returns true for `Tie` and `Winner`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Unfinished)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&P> {
        match self {
            Outcome::Winner { player_id } => Some(player_id),
            Outcome::Unfinished | Outcome::Tie => None,
        }
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Outcome<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "unfinished"),
            Outcome::Tie => write!(f, "tie"),
            Outcome::Winner { player_id } => write!(f, "player {} wins", player_id),
        }
    }
}

/// Outcome of a game that can continue.
#[instrument]
pub fn unfinished<P>() -> Outcome<P> {
    Outcome::Unfinished
}

/// Outcome of a game that ended without a winner.
#[instrument]
pub fn tie<P>() -> Outcome<P> {
    Outcome::Tie
}

/// Outcome of a game won by `player_id`.
#[instrument(skip(player_id))]
pub fn winner<P>(player_id: P) -> Outcome<P> {
    Outcome::Winner { player_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_constructors_match_kinds() {
        assert_eq!(unfinished::<char>().kind(), OutcomeKind::Unfinished);
        assert_eq!(tie::<char>().kind(), OutcomeKind::Tie);
        assert_eq!(winner('o').kind(), OutcomeKind::Winner);
    }

    #[test]
    fn test_only_unfinished_is_ongoing() {
        assert!(!unfinished::<char>().is_terminal());
        assert!(tie::<char>().is_terminal());
        assert!(winner('x').is_terminal());
    }

    #[test]
    fn test_winner_accessor() {
        assert_eq!(winner('x').winner(), Some(&'x'));
        assert_eq!(tie::<char>().winner(), None);
    }

    #[test]
    fn test_three_kinds() {
        assert_eq!(OutcomeKind::iter().count(), 3);
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let json = serde_json::to_value(winner("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "winner", "playerId": "x" }));

        let json = serde_json::to_value(tie::<String>()).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "tie" }));
    }

    #[test]
    fn test_display() {
        assert_eq!(winner('o').to_string(), "player o wins");
        assert_eq!(unfinished::<char>().to_string(), "unfinished");
    }
}

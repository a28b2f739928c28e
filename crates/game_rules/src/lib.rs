//! Generic contract for deterministic turn-based game rules.
//!
//! A rules engine exposes four operations over a state type `S` and a move
//! type `M`: build the initial state, check a move, apply a move, and
//! classify the outcome of a state. Results are reported through two closed
//! variant sets, [`Outcome`] and [`MoveResult`], each with a `kind()`
//! discriminant for exhaustive branching.
//!
//! # Example
//!
//! ```
//! use game_rules::{Outcome, OutcomeKind, winner};
//!
//! let outcome: Outcome<char> = winner('x');
//! assert_eq!(outcome.kind(), OutcomeKind::Winner);
//! assert!(outcome.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod move_result;
mod outcome;
mod replay;
mod rules;

pub use move_result::{
    MoveResult, MoveResultKind, invalid_move, made_move, move_ended_game,
};
pub use outcome::{Outcome, OutcomeKind, tie, unfinished, winner};
pub use replay::{Replay, ReplayError, replay};
pub use rules::GameRules;

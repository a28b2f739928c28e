//! Tests for driving a rules engine with `replay`.

use game_rules::{
    GameRules, MoveResult, Outcome, ReplayError, invalid_move, made_move, move_ended_game, replay,
    tie, unfinished, winner,
};

/// Players alternately add 1 or 2 to a running total; reaching 5 wins,
/// overshooting ties.
struct RaceToFive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RaceState {
    total: u8,
    to_move: u8,
    last_mover: Option<u8>,
}

impl GameRules<RaceState, u8> for RaceToFive {
    type Player = u8;

    fn init_state(&self) -> RaceState {
        RaceState {
            total: 0,
            to_move: 1,
            last_mover: None,
        }
    }

    fn is_valid_move(&self, _state: &RaceState, step: &u8) -> bool {
        matches!(step, 1 | 2)
    }

    fn on_move(&self, state: &RaceState, step: &u8) -> MoveResult<RaceState> {
        if !self.is_valid_move(state, step) {
            return invalid_move(format!("Step {} is not allowed.", step));
        }
        let next = RaceState {
            total: state.total + step,
            to_move: 3 - state.to_move,
            last_mover: Some(state.to_move),
        };
        if self.get_outcome(&next).is_terminal() {
            move_ended_game(next)
        } else {
            made_move(next)
        }
    }

    fn get_outcome(&self, state: &RaceState) -> Outcome<u8> {
        match (state.total, state.last_mover) {
            (5, Some(mover)) => winner(mover),
            (t, _) if t > 5 => tie(),
            _ => unfinished(),
        }
    }
}

#[test]
fn test_replay_empty_sequence_is_initial_state() {
    let replayed = replay(&RaceToFive, Vec::<u8>::new()).unwrap();
    assert_eq!(replayed.state, RaceToFive.init_state());
    assert_eq!(replayed.outcome, unfinished());
    assert_eq!(replayed.moves_applied, 0);
}

#[test]
fn test_replay_to_win() {
    let replayed = replay(&RaceToFive, [2u8, 1, 2]).unwrap();
    assert_eq!(replayed.state.total, 5);
    assert_eq!(replayed.outcome, winner(1));
    assert_eq!(replayed.moves_applied, 3);
}

#[test]
fn test_replay_stops_on_invalid_move() {
    let err = replay(&RaceToFive, [1u8, 3, 1]).unwrap_err();
    assert_eq!(
        err,
        ReplayError::InvalidMove {
            index: 1,
            reason: "Step 3 is not allowed.".to_string(),
        }
    );
    assert!(err.to_string().contains("move 1 rejected"));
}

#[test]
fn test_replay_rejects_moves_after_game_over() {
    let err = replay(&RaceToFive, [2u8, 2, 2, 1]).unwrap_err();
    assert_eq!(err, ReplayError::MovesAfterGameOver { index: 3 });
}

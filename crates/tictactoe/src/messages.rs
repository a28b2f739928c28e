//! Rejection reasons reported in `InvalidMove` results.

use crate::PlayerMarker;

/// Reason for a move made by `mover` while `current_turn` is to play.
pub fn out_of_turn_message(current_turn: PlayerMarker, mover: PlayerMarker) -> String {
    format!("Cannot move for player {} on player {} turn.", mover, current_turn)
}

/// Reason for a move onto a claimed or nonexistent tile.
pub fn tile_already_occupied_message(tile: usize) -> String {
    format!("Tile {} is already occupied.", tile)
}

/// Reason for a move on a game that is already decided.
pub fn game_already_over_message() -> String {
    "Game is already over.".to_string()
}

//! Win detection logic for tic-tac-toe.

use crate::{Board, PlayerMarker, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game when held by a single player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WinningLine {
    /// Tiles 0, 1, 2.
    Row1,
    /// Tiles 3, 4, 5.
    Row2,
    /// Tiles 6, 7, 8.
    Row3,
    /// Tiles 0, 3, 6.
    Col1,
    /// Tiles 1, 4, 7.
    Col2,
    /// Tiles 2, 5, 8.
    Col3,
    /// Tiles 0, 4, 8.
    Diag1,
    /// Tiles 2, 4, 6.
    Diag2,
}

impl WinningLine {
    /// All lines in evaluation order.
    ///
    /// When several lines are complete at once, the first one here decides.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::Row1,
        WinningLine::Row2,
        WinningLine::Row3,
        WinningLine::Col1,
        WinningLine::Col2,
        WinningLine::Col3,
        WinningLine::Diag1,
        WinningLine::Diag2,
    ];

    /// Board indices covered by this line.
    pub const fn tiles(self) -> [usize; 3] {
        match self {
            WinningLine::Row1 => [0, 1, 2],
            WinningLine::Row2 => [3, 4, 5],
            WinningLine::Row3 => [6, 7, 8],
            WinningLine::Col1 => [0, 3, 6],
            WinningLine::Col2 => [1, 4, 7],
            WinningLine::Col3 => [2, 5, 8],
            WinningLine::Diag1 => [0, 4, 8],
            WinningLine::Diag2 => [2, 4, 6],
        }
    }

    /// Returns the player holding all three tiles of this line, if any.
    pub fn holder(self, board: &Board) -> Option<PlayerMarker> {
        let [a, b, c] = self.tiles();
        let squares = board.squares();
        match squares[a] {
            Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some(player)
            }
            _ => None,
        }
    }
}

/// Returns the first completed line in evaluation order.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.holder(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the holder of the first completed line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<PlayerMarker> {
    WinningLine::ALL
        .into_iter()
        .find_map(|line| line.holder(board))
}

//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of tiles on the board.
pub const TILE_COUNT: usize = 9;

/// Marker placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerMarker {
    /// Player x (moves first by convention).
    X,
    /// Player o.
    O,
}

impl PlayerMarker {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerMarker::X => PlayerMarker::O,
            PlayerMarker::O => PlayerMarker::X,
        }
    }
}

/// A tile on the board.
///
/// Serialized as `null` when empty and as the owner's marker otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Square {
    /// Empty tile.
    Empty,
    /// Tile claimed by a player.
    Occupied(PlayerMarker),
}

impl Square {
    /// Returns the owner of the tile, if any.
    pub fn owner(self) -> Option<PlayerMarker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(PlayerMarker::X) => 'x',
            Square::Occupied(PlayerMarker::O) => 'o',
        }
    }
}

/// 3x3 board, tiles 0-8 in row-major order.
///
/// `Board` is a plain value: placing a marker yields a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [Square; TILE_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; TILE_COUNT],
        }
    }

    /// Creates a board from its tiles in row-major order.
    pub fn from_squares(squares: [Square; TILE_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the tile at `tile`, or `None` when out of range.
    pub fn get(&self, tile: usize) -> Option<Square> {
        self.squares.get(tile).copied()
    }

    /// Returns true if `tile` is on the board and unclaimed.
    pub fn is_empty(&self, tile: usize) -> bool {
        matches!(self.get(tile), Some(Square::Empty))
    }

    /// Returns a copy of this board with `tile` set to `square`.
    ///
    /// Out-of-range tiles leave the copy unchanged.
    pub fn with_square(mut self, tile: usize, square: Square) -> Self {
        if let Some(slot) = self.squares.get_mut(tile) {
            *slot = square;
        }
        self
    }

    /// Returns all tiles.
    pub fn squares(&self) -> &[Square; TILE_COUNT] {
        &self.squares
    }

    /// Returns the unclaimed tile indices in ascending order.
    pub fn empty_tiles(&self) -> Vec<usize> {
        (0..TILE_COUNT).filter(|&tile| self.is_empty(tile)).collect()
    }

    /// Returns true if every tile is claimed.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the tiles claimed by `marker`.
    pub fn count(&self, marker: PlayerMarker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(marker))
            .count()
    }

    /// Formats the board as a grid, labelling empty tiles with their index.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let tile = row * 3 + col;
                let symbol = match self.squares[tile] {
                    Square::Empty => tile.to_string(),
                    occupied => occupied.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: one character per tile, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The input did not describe exactly nine tiles.
    #[display("expected {} tiles, found {}", TILE_COUNT, found)]
    WrongLength {
        /// Number of tiles found.
        found: usize,
    },
    /// A character did not name a tile state.
    #[display("unknown tile '{}' at index {}", cell, tile)]
    UnknownTile {
        /// Index of the offending tile.
        tile: usize,
        /// The offending character.
        cell: char,
    },
}

/// Parses compact notation such as `"xox.o...."`.
///
/// `x` and `o` (any case) claim a tile; `.`, `_`, `-` and space leave it
/// empty. `/` may separate rows and is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| *c != '/').collect();
        if cells.len() != TILE_COUNT {
            return Err(BoardParseError::WrongLength { found: cells.len() });
        }

        let mut squares = [Square::Empty; TILE_COUNT];
        for (tile, cell) in cells.into_iter().enumerate() {
            squares[tile] = match cell.to_ascii_lowercase() {
                'x' => Square::Occupied(PlayerMarker::X),
                'o' => Square::Occupied(PlayerMarker::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                _ => return Err(BoardParseError::UnknownTile { tile, cell }),
            };
        }

        Ok(Self { squares })
    }
}

/// Complete game state: the board and the player to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicTacToeState {
    /// The board.
    pub board: Board,
    /// Player who moves next.
    pub player_turn: PlayerMarker,
}

impl TicTacToeState {
    /// Creates a state from a board and the player to move.
    pub fn new(board: Board, player_turn: PlayerMarker) -> Self {
        Self { board, player_turn }
    }
}

/// A player claiming a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeMove {
    /// Tile index being claimed.
    pub tile: usize,
    /// Player claiming it.
    pub owner: PlayerMarker,
}

impl TicTacToeMove {
    /// Creates a new move.
    pub fn new(tile: usize, owner: PlayerMarker) -> Self {
        Self { tile, owner }
    }
}

impl std::fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.owner, self.tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(PlayerMarker::X.opponent(), PlayerMarker::O);
        assert_eq!(PlayerMarker::O.opponent().opponent(), PlayerMarker::O);
    }

    #[test]
    fn test_marker_text() {
        assert_eq!(PlayerMarker::X.to_string(), "x");
        assert_eq!("O".parse::<PlayerMarker>(), Ok(PlayerMarker::O));
    }

    #[test]
    fn test_with_square_copies() {
        let board = Board::new();
        let next = board.with_square(4, Square::Occupied(PlayerMarker::X));
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(PlayerMarker::X)));
    }

    #[test]
    fn test_with_square_out_of_range_is_noop() {
        let board = Board::new();
        assert_eq!(board.with_square(9, Square::Occupied(PlayerMarker::O)), board);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        assert!(!Board::new().is_empty(9));
        assert_eq!(Board::new().get(42), None);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "xox/.o./..x".parse().unwrap();
        assert_eq!(board.to_string(), "xox.o...x");
        assert_eq!(board.count(PlayerMarker::X), 3);
        assert_eq!(board.empty_tiles(), vec![3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "xo".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 2 })
        );
        assert_eq!(
            "xoz......".parse::<Board>(),
            Err(BoardParseError::UnknownTile { tile: 2, cell: 'z' })
        );
    }

    #[test]
    fn test_grid_labels_empty_tiles() {
        let board: Board = "x...o....".parse().unwrap();
        assert_eq!(board.grid(), "x|1|2\n-+-+-\n3|o|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_state_wire_shape() {
        let board: Board = "xo.......".parse().unwrap();
        let state = TicTacToeState::new(board, PlayerMarker::X);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "board": ["x", "o", null, null, null, null, null, null, null],
                "playerTurn": "x",
            })
        );
        let back: TicTacToeState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}

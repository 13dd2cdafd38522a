//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, the human).
    X,
    /// Player O (goes second, the computer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn for this player.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn mark(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small values: every move produces a new board, so a caller
/// holding a board never sees it change underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// No legality check; see [`crate::apply`] for the checked version.
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// True when mark counts fit alternating play with X moving first.
    pub fn has_alternating_counts(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Formats the board as a human-readable string, numbering empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.mark().to_string(),
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

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", cells[0].mark(), cells[1].mark(), cells[2].mark())?;
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[error(ignore)]
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
    /// The board did not contain exactly nine cells.
    #[error(ignore)]
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order, e.g. `"XX./OO./..."`.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and digits are empty.
    /// Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongCellCount(v.len()))?;
        Ok(Self { squares })
    }
}

/// Outcome of evaluating a board. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameResult {
    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(player) => write!(f, "Player {} wins", player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_with_separators() {
        let board: Board = "X X . / O O . / . . .".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_board_numbered_empties() {
        let board: Board = "1|X|3\n4|O|6\n7|8|9".parse().unwrap();
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!(
            "XX.OO..".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(7))
        );
        assert_eq!(
            "XX.OO..?.".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('?'))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_with_returns_new_board() {
        let board = Board::new();
        let next = board.with(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_alternating_counts() {
        assert!(Board::new().has_alternating_counts());
        let board: Board = "X........".parse().unwrap();
        assert!(board.has_alternating_counts());
        let board: Board = "O........".parse().unwrap();
        assert!(!board.has_alternating_counts());
    }

    #[test]
    fn test_parse_error_is_a_std_error() {
        use std::error::Error as _;
        let err: Box<dyn std::error::Error> = Box::new(ParseBoardError::UnexpectedChar('?'));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Unexpected character '?' in board");
    }
}

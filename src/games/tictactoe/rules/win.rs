//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: rows top to bottom, columns left to right,
/// then the main and anti diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of `line` if all three squares hold the same mark.
pub fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == Square::Occupied(player) && board.get(c) == Square::Occupied(player) =>
        {
            Some(player)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first completed line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

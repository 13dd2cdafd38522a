//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating and advancing a
//! board. Rules are separated from board storage so the search and the
//! session can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, GameResult, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Evaluates the board.
///
/// Lines are checked rows first (top to bottom), then columns (left to
/// right), then the main and anti diagonals; the first completed line
/// decides the winner.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Places `player`'s mark at `position`, returning the new board.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already won or drawn.
/// - [`MoveError::SquareOccupied`] if the square is taken.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn apply(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if evaluate(board).is_terminal() {
        debug!("Rejecting move on finished board");
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(position) {
        debug!("Rejecting move on occupied square");
        return Err(MoveError::SquareOccupied(position));
    }

    Ok(board.with(position, player))
}

/// Returns every empty position in row-major order.
///
/// Each call yields a fresh iterator over the given board.
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::ALL
        .into_iter()
        .filter(move |pos| board.is_empty(*pos))
}

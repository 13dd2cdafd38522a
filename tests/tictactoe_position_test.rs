//! Tests for tic-tac-toe positions and legal moves.

use minimax_tictactoe::{Board, Player, Position, Square, legal_moves};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_and_column() {
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
    assert_eq!(Position::from_coords(2, 1), Some(Position::BottomCenter));
}

#[test]
fn test_legal_moves_empty_board() {
    let board = Board::new();
    let valid: Vec<_> = legal_moves(&board).collect();
    assert_eq!(valid, Position::ALL.to_vec()); // All positions, row-major
}

#[test]
fn test_legal_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid: Vec<_> = legal_moves(&board).collect();
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

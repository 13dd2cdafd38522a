//! Tests for the human-vs-computer session.

use minimax_tictactoe::{
    Board, COMPUTER, GameResult, GameSession, HUMAN, MoveError, Phase, Player, Position, Square,
    TurnOutcome,
};

/// Clicks cells in `order` until the game ends.
fn play_until_over(session: &mut GameSession, order: &[Position]) {
    for _ in 0..5 {
        for pos in order {
            if session.phase() == Phase::Terminal {
                return;
            }
            session.handle_cell_click(pos.row(), pos.col());
        }
    }
}

#[test]
fn test_initial_state() {
    let session = GameSession::new();
    assert_eq!(session.phase(), Phase::HumanTurn);
    assert_eq!(session.current_board(), Board::new());
    assert_eq!(session.current_result(), GameResult::InProgress);
}

#[test]
fn test_turns_alternate_and_counts_stay_balanced() {
    let mut session = GameSession::new();
    let mut expected_moves = 0;

    for pos in [Position::TopLeft, Position::BottomRight, Position::TopRight, Position::BottomLeft] {
        if session.phase() != Phase::HumanTurn {
            break;
        }
        if let TurnOutcome::Played { reply, .. } = session.handle_cell_click(pos.row(), pos.col()) {
            expected_moves += 1 + usize::from(reply.is_some());
        }
        let board = session.current_board();
        assert!(board.has_alternating_counts());
        if session.phase() == Phase::HumanTurn {
            assert_eq!(board.count(HUMAN), board.count(COMPUTER));
        }
        assert_eq!(session.history().len(), expected_moves);
    }

    let players: Vec<Player> = session.history().iter().map(|m| m.player).collect();
    for (i, player) in players.iter().enumerate() {
        assert_eq!(*player, if i % 2 == 0 { HUMAN } else { COMPUTER });
    }
}

#[test]
fn test_occupied_click_changes_nothing() {
    let mut session = GameSession::new();
    let TurnOutcome::Played { reply: Some(reply), .. } = session.handle_cell_click(0, 0) else {
        panic!("first click should be answered");
    };
    let before = session.clone();

    for pos in [Position::TopLeft, reply] {
        let outcome = session.handle_cell_click(pos.row(), pos.col());
        assert_eq!(outcome, TurnOutcome::Ignored(MoveError::SquareOccupied(pos)));
        assert_eq!(session, before);
    }
}

#[test]
fn test_human_never_wins() {
    let orders: [[Position; 9]; 2] = [Position::ALL, {
        let mut reversed = Position::ALL;
        reversed.reverse();
        reversed
    }];
    for order in orders {
        let mut session = GameSession::new();
        play_until_over(&mut session, &order);
        assert_eq!(session.phase(), Phase::Terminal);
        assert_ne!(session.current_result(), GameResult::Win(Player::X));
    }
}

#[test]
fn test_clicks_after_game_over_are_ignored() {
    let mut session = GameSession::new();
    play_until_over(&mut session, &Position::ALL);
    let before = session.clone();

    let empty = Position::ALL
        .into_iter()
        .find(|pos| session.current_board().get(*pos) == Square::Empty);
    if let Some(pos) = empty {
        assert_eq!(
            session.handle_cell_click(pos.row(), pos.col()),
            TurnOutcome::Ignored(MoveError::GameOver)
        );
    }
    assert_eq!(session, before);
}

#[test]
fn test_restart_resets_after_any_result() {
    let orders: [&[Position]; 2] = [
        &Position::ALL,
        &[Position::Center, Position::TopLeft, Position::BottomRight, Position::TopRight],
    ];
    for order in orders {
        let mut session = GameSession::new();
        play_until_over(&mut session, order);
        if session.phase() != Phase::Terminal {
            play_until_over(&mut session, &Position::ALL);
        }
        assert!(session.current_result().is_terminal());

        assert!(session.handle_restart_request());
        assert_eq!(session.phase(), Phase::HumanTurn);
        assert_eq!(session.current_board(), Board::new());
        assert!(session.history().is_empty());
    }
}

#[test]
fn test_restart_rejected_mid_game() {
    let mut session = GameSession::new();
    assert!(!session.handle_restart_request());
    session.handle_cell_click(2, 2);
    assert!(!session.handle_restart_request());
    assert_eq!(session.history().len(), 2);
}

//! Tic-tac-toe against a perfect-play computer opponent.
//!
//! The computer (O) picks its moves with an exhaustive minimax search, so
//! it never loses. The human (X) plays with the mouse in a terminal UI.
//!
//! # Architecture
//!
//! - **Rules**: board, move application, win/draw evaluation
//! - **Search**: minimax over the full game tree
//! - **Session**: the human/computer turn cycle
//! - **TUI**: ratatui front end that only reads the session and forwards
//!   clicks and restarts to it
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameResult, GameSession, TurnOutcome};
//!
//! let mut session = GameSession::new();
//! let outcome = session.handle_cell_click(1, 1);
//! assert!(matches!(outcome, TurnOutcome::Played { reply: Some(_), .. }));
//! assert_eq!(session.current_result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COMPUTER, DRAW, GameResult, GameSession, HUMAN, LINES, LOSS, Move, MoveError,
    ParseBoardError, Phase, Player, Position, SearchReport, Square, TurnOutcome, WIN, apply,
    best_move, best_move_for, check_winner, evaluate, is_draw, is_full, legal_moves, play_out,
    score, search,
};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, BoardLayout, map_event, move_cursor, result_message, run_tui};

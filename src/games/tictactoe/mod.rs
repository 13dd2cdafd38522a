//! Tic-tac-toe: board, rules, minimax search and the human-vs-computer session.

mod action;
mod position;
mod rules;
mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{LINES, apply, check_winner, evaluate, is_draw, is_full, legal_moves};
pub use search::{DRAW, LOSS, SearchReport, WIN, best_move, best_move_for, play_out, score, search};
pub use session::{COMPUTER, GameSession, HUMAN, Phase, TurnOutcome};
pub use types::{Board, GameResult, ParseBoardError, Player, Square};

//! Exhaustive minimax search for the computer's move.
//!
//! Scores are always from O's point of view: `+1` when O wins, `-1` when X
//! wins, `0` for a draw. There is no depth discount, so a slow forced win
//! scores the same as a fast one.
//!
//! The board is a small `Copy` value. Each speculative move builds a new
//! board for the child call, so no frame ever sees another frame's
//! speculative state.

use super::rules::{evaluate, legal_moves};
use super::{Board, GameResult, Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position O has won.
pub const WIN: i32 = 1;
/// Score of a drawn position.
pub const DRAW: i32 = 0;
/// Score of a position X has won.
pub const LOSS: i32 = -1;

/// Starting value for a maximizing loop; any real score replaces it.
const BELOW_ANY_SCORE: i32 = LOSS - 1;
/// Starting value for a minimizing loop; any real score replaces it.
const ABOVE_ANY_SCORE: i32 = WIN + 1;

/// Result of a search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The move chosen.
    pub position: Position,
    /// Minimax value of the chosen move, from O's point of view.
    pub score: i32,
    /// Positions scored below the searched position.
    pub nodes: u64,
}

/// Recursive minimax with a visited-position counter.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn score(&mut self, board: &Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(board) {
            GameResult::Win(Player::O) => return WIN,
            GameResult::Win(Player::X) => return LOSS,
            GameResult::Draw => return DRAW,
            GameResult::InProgress => {}
        }

        if maximizing {
            let mut best = BELOW_ANY_SCORE;
            for pos in legal_moves(board) {
                let child = board.with(pos, Player::O);
                best = best.max(self.score(&child, false));
            }
            best
        } else {
            let mut best = ABOVE_ANY_SCORE;
            for pos in legal_moves(board) {
                let child = board.with(pos, Player::X);
                best = best.min(self.score(&child, true));
            }
            best
        }
    }

    /// Picks the first move with the best score for `player`.
    fn choose(&mut self, board: &Board, player: Player) -> (Position, i32) {
        let mut best: Option<(Position, i32)> = None;

        for pos in legal_moves(board) {
            let child = board.with(pos, player);
            let score = self.score(&child, player == Player::X);
            let improves = match (best, player) {
                (None, _) => true,
                (Some((_, best_score)), Player::O) => score > best_score,
                (Some((_, best_score)), Player::X) => score < best_score,
            };
            if improves {
                best = Some((pos, score));
            }
        }

        // Guarded by the callers' precondition asserts.
        best.unwrap_or_else(|| unreachable!("search called on a board with no legal moves"))
    }
}

/// Minimax value of `board` from O's point of view.
///
/// `maximizing` is true when O is to move.
pub fn score(board: &Board, maximizing: bool) -> i32 {
    Minimax::default().score(board, maximizing)
}

/// Searches `board` for `player` and reports the chosen move.
///
/// O takes the first move with the highest score, X the first with the
/// lowest, in row-major order.
///
/// # Panics
///
/// Panics if the board is already won or drawn. Callers must only search
/// positions that are still in progress.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn search(board: &Board, player: Player) -> SearchReport {
    let result = evaluate(board);
    assert!(
        !result.is_terminal(),
        "search called on a finished board ({result})"
    );

    let mut minimax = Minimax::default();
    let (position, score) = minimax.choose(board, player);
    let report = SearchReport {
        position,
        score,
        nodes: minimax.nodes,
    };
    debug!(
        ?player,
        position = %report.position,
        score = report.score,
        nodes = report.nodes,
        "Search complete"
    );
    report
}

/// The best move for `player` on `board`. See [`search`].
pub fn best_move_for(board: &Board, player: Player) -> Position {
    search(board, player).position
}

/// The computer's (O's) best move on `board`.
///
/// # Panics
///
/// Panics if the board is already won or drawn.
pub fn best_move(board: &Board) -> Position {
    best_move_for(board, Player::O)
}

/// Plays both sides with [`search`] from `board` until the game ends.
///
/// Returns the final board and the moves played, `to_move` first.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn play_out(board: &Board, to_move: Player) -> (Board, Vec<Move>) {
    let mut board = *board;
    let mut player = to_move;
    let mut moves = Vec::new();

    while !evaluate(&board).is_terminal() {
        let position = best_move_for(&board, player);
        board = board.with(position, player);
        moves.push(Move::new(player, position));
        player = player.opponent();
    }

    debug!(result = %evaluate(&board), plies = moves.len(), "Play-out complete");
    (board, moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let o_wins: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(score(&o_wins, true), WIN);
        let x_wins: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(score(&x_wins, true), LOSS);
        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(score(&drawn, false), DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(score(&Board::new(), false), DRAW);
        assert_eq!(score(&Board::new(), true), DRAW);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can finish the top row.
        let board: Board = "OO./XX./X..".parse().unwrap();
        assert_eq!(best_move(&board), Position::TopRight);
        assert_eq!(search(&board, Player::O).score, WIN);
    }

    #[test]
    fn test_report_counts_nodes() {
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        let report = search(&board, Player::O);
        assert_eq!(report.position, Position::BottomRight);
        assert_eq!(report.score, DRAW);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_x_search_minimizes() {
        // Top-right completes X's anti-diagonal and blocks O's top row.
        let board: Board = "OO./.X./X..".parse().unwrap();
        let report = search(&board, Player::X);
        assert_eq!(report.position, Position::TopRight);
        assert_eq!(report.score, LOSS);
    }

    #[test]
    fn test_perfect_play_out_draws() {
        let (board, moves) = play_out(&Board::new(), Player::X);
        assert_eq!(evaluate(&board), GameResult::Draw);
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(Player::X, Position::TopLeft));
    }

    #[test]
    #[should_panic(expected = "finished board")]
    fn test_best_move_on_finished_board_panics() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        best_move(&board);
    }

    #[test]
    #[should_panic(expected = "finished board")]
    fn test_best_move_on_full_board_panics() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        best_move(&board);
    }
}

//! Turn orchestration between the human (X) and the computer (O).
//!
//! The session owns the board and drives a three-state machine:
//! `HumanTurn -> ComputerTurn -> HumanTurn`, ending in `Terminal` once the
//! board is won or drawn. The computer's reply is computed inside the same
//! call that applied the human's move, so `ComputerTurn` is never visible
//! from outside.

use super::rules::{apply, evaluate};
use super::search::best_move;
use super::{Board, GameResult, Move, MoveError, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The human always plays X.
pub const HUMAN: Player = Player::X;
/// The computer always plays O.
pub const COMPUTER: Player = Player::O;

/// Where the session is in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a click.
    HumanTurn,
    /// The computer is searching. Only held inside a single call.
    ComputerTurn,
    /// The game is won or drawn; only a restart is accepted.
    Terminal,
}

/// What happened in response to a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The click was ignored and the session is unchanged.
    Ignored(MoveError),
    /// The human's move was applied, followed by the computer's reply
    /// unless the human's move ended the game.
    Played {
        /// Where the human played.
        human: Position,
        /// Where the computer replied.
        reply: Option<Position>,
    },
}

/// A game of human versus computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    #[getter(skip)]
    board: Board,
    #[getter(skip)]
    phase: Phase,
    /// Moves played this game, in order.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board, waiting for the human.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            history: Vec::new(),
        }
    }

    /// Current phase of the turn cycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current board. A copy; the session is unaffected by changes to it.
    pub fn current_board(&self) -> Board {
        self.board
    }

    /// Current result, derived from the board.
    pub fn current_result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// Handles a click on the cell at (`row`, `col`).
    ///
    /// Ignored unless the session is waiting for the human and the cell is
    /// empty. Otherwise plays the human's move and, if the game goes on,
    /// the computer's reply.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle_cell_click(&mut self, row: usize, col: usize) -> TurnOutcome {
        match self.play_human(row, col) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(%reason, "Ignoring click");
                TurnOutcome::Ignored(reason)
            }
        }
    }

    /// Resets to an empty board if the game is over.
    ///
    /// Returns `false`, leaving the session unchanged, while a game is
    /// still in progress.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle_restart_request(&mut self) -> bool {
        if self.phase != Phase::Terminal {
            debug!("Ignoring restart during play");
            return false;
        }

        info!(result = %self.current_result(), "Restarting game");
        *self = Self::new();
        true
    }

    fn play_human(&mut self, row: usize, col: usize) -> Result<TurnOutcome, MoveError> {
        match self.phase {
            Phase::HumanTurn => {}
            Phase::Terminal => return Err(MoveError::GameOver),
            // Only held between `place` and `play_computer` below.
            Phase::ComputerTurn => unreachable!("click handled during the computer's turn"),
        }

        let position = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(position, HUMAN)?;

        let reply = if self.phase == Phase::ComputerTurn {
            Some(self.play_computer())
        } else {
            None
        };

        Ok(TurnOutcome::Played {
            human: position,
            reply,
        })
    }

    fn play_computer(&mut self) -> Position {
        let position = best_move(&self.board);
        // `best_move` only returns empty squares of an unfinished board.
        if let Err(e) = self.place(position, COMPUTER) {
            unreachable!("search chose an illegal move: {e}");
        }
        position
    }

    /// Applies a move and advances the phase.
    fn place(&mut self, position: Position, player: Player) -> Result<(), MoveError> {
        self.board = apply(&self.board, position, player)?;
        self.history.push(Move::new(player, position));

        let result = self.current_result();
        self.phase = if result.is_terminal() {
            Phase::Terminal
        } else if player == HUMAN {
            Phase::ComputerTurn
        } else {
            Phase::HumanTurn
        };
        info!(%player, %position, %result, "Move played");
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

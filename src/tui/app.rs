//! Application state and logic.

use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};
use crate::games::tictactoe::{GameSession, Position, TurnOutcome};

const WELCOME: &str = "Your move: click a square (or arrows + Enter).";

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            status_message: WELCOME.to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a player action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.session.handle_cell_click(pos.row(), pos.col()) {
            TurnOutcome::Played { human, reply } => {
                debug!(%human, ?reply, "Turn played");
                self.status_message = match reply {
                    Some(reply) => format!(
                        "You played {}, computer played {}. Your move.",
                        human.label(),
                        reply.label()
                    ),
                    None => format!("You played {}.", human.label()),
                };
            }
            TurnOutcome::Ignored(reason) => {
                self.status_message = format!("{}. Your move.", reason);
            }
        }
    }

    fn restart(&mut self) {
        if self.session.handle_restart_request() {
            self.cursor = Position::Center;
            self.status_message = WELCOME.to_string();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! Terminal events to game actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, instrument};

use super::ui::BoardLayout;
use crate::games::tictactoe::Position;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// Move the keyboard cursor one cell in the arrow's direction.
    MoveCursor(KeyCode),
    /// Play the cell under the keyboard cursor.
    PlayCursor,
    /// Start a new game (only honored once the game is over).
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a terminal event to an action.
///
/// Left clicks map through `layout` to the cell under the pointer; clicks
/// outside every cell produce no action.
#[instrument(skip(layout))]
pub fn map_event(event: &Event, layout: &BoardLayout) -> Option<Action> {
    let action = match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => layout.cell_at(*column, *row).map(Action::Play),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => map_key(*code),
        _ => None,
    };
    if action.is_some() {
        debug!(?action, "Mapped terminal event");
    }
    action
}

fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::MoveCursor(code)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_label_or_number(&c.to_string()).map(Action::Play)
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

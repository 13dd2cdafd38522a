//! Stateless UI rendering for tic-tac-toe.
//!
//! [`BoardLayout`] is computed once per frame and used both to draw the
//! grid and to turn a mouse position back into a cell.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use super::app::App;
use crate::games::tictactoe::{GameResult, Player, Position, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardLayout {
    title: Rect,
    status: Rect,
    cells: [Rect; 9],
    row_separators: [Rect; 2],
    col_separators: [Rect; 6],
}

impl BoardLayout {
    /// Lays out title, board and status line inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(4),            // Status
            ])
            .split(area);

        let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[r * 3 + c] = cell;
            }
            col_separators[r * 2] = cols[1];
            col_separators[r * 2 + 1] = cols[3];
        }

        Self {
            title: chunks[0],
            status: chunks[2],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
        }
    }

    /// Screen area of a cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// The cell under the terminal coordinate, if any.
    ///
    /// Grid lines and the space around the board belong to no cell.
    #[instrument(skip(self))]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cell(*pos);
            column >= r.left() && column < r.right() && row >= r.top() && row < r.bottom()
        })
    }
}

/// Main and secondary status lines for a result, as shown to the human.
pub fn result_message(result: GameResult) -> Option<(&'static str, &'static str)> {
    let main = match result {
        GameResult::InProgress => return None,
        GameResult::Win(Player::X) => "You win!",
        GameResult::Win(Player::O) => "You lose!",
        GameResult::Draw => "It's a draw!",
    };
    Some((main, "Press space to restart."))
}

/// Renders the whole frame for `app`.
pub fn draw(frame: &mut Frame, app: &App, layout: &BoardLayout) {
    let title = Paragraph::new("Tic-Tac-Toe vs Minimax")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    let board = app.session().current_board();
    let show_cursor = !app.session().current_result().is_terminal();
    for pos in Position::ALL {
        let cursor = show_cursor && pos == app.cursor();
        draw_cell(frame, layout.cell(pos), board.get(pos), cursor);
    }
    for area in layout.row_separators {
        draw_separator(frame, area, "─");
    }
    for area in layout.col_separators {
        draw_separator(frame, area, "│");
    }

    draw_status(frame, layout.status, app);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, cursor: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![Line::from(""), Line::from(Span::styled(symbol, style)), Line::from("")];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, glyph: &str) {
    let text = if area.height > 1 {
        vec![Line::from(glyph); area.height as usize]
    } else {
        vec![Line::from(glyph.repeat(area.width as usize))]
    };
    let sep = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match result_message(app.session().current_result()) {
        Some((main, sub)) => vec![
            Line::from(Span::styled(main, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
            Line::from(sub),
        ],
        None => vec![Line::from(app.status_message()), Line::from("q: quit")],
    };
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

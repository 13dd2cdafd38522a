//! Terminal UI: a mouse-driven board for playing against the computer.
//!
//! Everything here is presentation. The game itself lives in
//! [`GameSession`](crate::GameSession); this module only reads it for
//! drawing and forwards clicks and restarts to it.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, map_event, move_cursor};
pub use ui::{BoardLayout, draw, result_message};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::Settings;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game in the terminal until the player quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    init_file_tracing(settings)?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, settings.poll_interval());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");

    res
}

/// Draw, wait for input, apply it; until the player quits.
#[instrument(skip(terminal))]
fn run_app(terminal: &mut CrosstermTerminal, poll_interval: Duration) -> Result<()> {
    let mut app = App::new();

    loop {
        let mut layout = BoardLayout::default();
        terminal.draw(|frame| {
            layout = BoardLayout::new(frame.area());
            draw(frame, &app, &layout);
        })?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(poll_interval)? {
            let event = event::read()?;
            if let Some(action) = map_event(&event, &layout) {
                app.apply(action);
            }
        }
    }
}

/// Logs to a file so output never lands on the game screen.
fn init_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

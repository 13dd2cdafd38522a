//! Command-line interface for the tic-tac-toe game.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::{Board, Player};

/// Tic-tac-toe against a perfect-play minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play,

    /// Print the best move for a position
    BestMove {
        /// Board in row-major order, e.g. "XX./OO./..." ('.' is empty)
        #[arg(long)]
        board: Board,

        /// Side to move
        #[arg(long, value_enum, default_value_t = Side::O)]
        player: Side,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the search play both sides from an empty board
    SelfPlay,
}

/// A side on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first player
    X,
    /// The second player
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

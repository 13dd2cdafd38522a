//! Tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{Board, Player, Settings, evaluate, play_out, run_tui, search};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&settings),
        Command::BestMove {
            board,
            player,
            json,
        } => {
            init_stderr_tracing(&settings);
            run_best_move(board, player.into(), json)
        }
        Command::SelfPlay => {
            init_stderr_tracing(&settings);
            run_self_play()
        }
    }
}

/// Prints the searched move for `board`.
#[instrument(skip(board))]
fn run_best_move(board: Board, player: Player, json: bool) -> Result<()> {
    let result = evaluate(&board);
    if result.is_terminal() {
        bail!("Board is already finished: {}", result);
    }

    let report = search(&board, player);
    info!(nodes = report.nodes, "Search finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board);
        println!(
            "{} plays {} (score {:+}, {} positions searched)",
            player, report.position, report.score, report.nodes
        );
    }
    Ok(())
}

/// Plays perfect X against perfect O and prints the game.
#[instrument]
fn run_self_play() -> Result<()> {
    let (board, moves) = play_out(&Board::new(), Player::X);
    for (ply, mov) in moves.iter().enumerate() {
        println!("{:>2}. {}", ply + 1, mov);
    }
    println!("\n{}\n\n{}", board, evaluate(&board));
    Ok(())
}

fn init_stderr_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

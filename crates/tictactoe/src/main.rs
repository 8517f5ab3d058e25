//! tictactoe - terminal front end
//!
//! Plays interactive matches against humans or the computer, or runs
//! computer-only batches.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::{KindChoice, MatchConfig, Side};
use std::path::PathBuf;
use terminal::TerminalView;
use tictactoe_core::Game;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            first,
            seed,
            json,
        } => run_play(config, x, o, first, seed, json),
        Command::Simulate {
            x,
            o,
            games,
            first,
            seed,
        } => {
            let tally = simulate::run_batch(x, o, first, games, seed)?;
            println!("{tally}");
            Ok(())
        }
    }
}

/// Run an interactive match on stdin/stdout
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    x: Option<KindChoice>,
    o: Option<KindChoice>,
    first: Option<Side>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let match_config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    let (player1, player2) = match_config.with_overrides(x, o, first).players();
    info!(first = %player1, second = %player2, "Starting interactive match");

    let view = TerminalView::new(json);
    let mut game = match seed {
        Some(seed) => Game::with_seed(view, seed),
        None => Game::with_observer(view),
    };
    game.start_game(player1, player2);

    terminal::run_match(&mut game, std::io::stdin().lock())?;
    Ok(())
}

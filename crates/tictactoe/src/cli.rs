//! Command-line interface for tictactoe.

use crate::config::{KindChoice, Side};
use clap::{Parser, Subcommand};

/// Tic-tac-toe against humans or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match
    Play {
        /// Path to a TOML match file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who plays X (overrides the match file)
        #[arg(long, value_enum)]
        x: Option<KindChoice>,

        /// Who plays O (overrides the match file)
        #[arg(long, value_enum)]
        o: Option<KindChoice>,

        /// Which mark moves first (overrides the match file)
        #[arg(long, value_enum)]
        first: Option<Side>,

        /// Seed for random computer players
        #[arg(long)]
        seed: Option<u64>,

        /// Print game events as JSON lines instead of drawing the board
        #[arg(long)]
        json: bool,
    },

    /// Pit two computer players against each other
    Simulate {
        /// Strategy for X
        #[arg(long, value_enum, default_value = "optimal")]
        x: KindChoice,

        /// Strategy for O
        #[arg(long, value_enum, default_value = "random")]
        o: KindChoice,

        /// Number of matches to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Which mark moves first
        #[arg(long, value_enum, default_value = "x")]
        first: Side,

        /// Base seed; match `i` uses `seed + i`
        #[arg(long)]
        seed: Option<u64>,
    },
}

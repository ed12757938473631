//! Command-line interface for strictly_tictactoe.

use strictly_tictactoe::Player;
use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - board judge and minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe judge with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the opponent in the terminal
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "strictly_tictactoe.toml")]
        config: std::path::PathBuf,

        /// Override the opponent's search depth (plies)
        #[arg(short, long)]
        depth: Option<u8>,

        /// Override which player the human controls (one or two)
        #[arg(long)]
        human: Option<Player>,
    },

    /// Judge a board given as nine cells (X, O, or . for empty)
    Judge {
        /// Board cells in row-major order, e.g. "XO./.X./..O"
        board: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the move the opponent would choose
    Suggest {
        /// Board cells in row-major order, e.g. "XO./.X./..O"
        board: String,

        /// Player to move (one or two)
        #[arg(short, long, default_value = "two")]
        player: Player,

        /// Search depth (plies)
        #[arg(short, long, default_value = "5")]
        depth: u8,
    },
}

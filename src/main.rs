//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Terminal play against the minimax opponent, plus one-shot judge and
//! suggest commands.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_tictactoe::{Board, GameConfig, Player, choose_move, evaluate};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            depth,
            human,
        } => run_play(config, depth, human),
        Command::Judge { board, json } => run_judge(&board, json),
        Command::Suggest {
            board,
            player,
            depth,
        } => run_suggest(&board, player, depth),
    }
}

/// Run the terminal game
fn run_play(config_path: PathBuf, depth: Option<u8>, human: Option<Player>) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(depth) = depth {
        config = config.with_search_depth(depth);
    }
    if let Some(human) = human {
        config = config.with_human_player(human);
    }

    tui::run_tui(&config)
}

/// Print the outcome of a board
#[instrument]
fn run_judge(board: &str, json: bool) -> Result<()> {
    initialize_cli_tracing();

    let board: Board = board.parse().context("Invalid board")?;
    let outcome = evaluate(&board);
    info!(%outcome, "Board judged");

    if json {
        let value = serde_json::json!({ "board": board, "outcome": outcome });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}\n\n{}", board, outcome);
    }
    Ok(())
}

/// Print the move the opponent would choose
#[instrument]
fn run_suggest(board: &str, player: Player, depth: u8) -> Result<()> {
    initialize_cli_tracing();

    let board: Board = board.parse().context("Invalid board")?;
    match choose_move(&board, player, depth) {
        Some(pos) => println!("{} plays {}", player, pos),
        None => println!("No empty cell left for {}", player),
    }
    Ok(())
}

fn initialize_cli_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

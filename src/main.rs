//! Strictly Checkers - command-line driver
//!
//! Replays a list of moves through the engine and prints the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, parse_move};
use std::path::PathBuf;
use strictly_checkers::{Game, Player, RulesConfig};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { rules, json, moves } => run_play(rules, json, &moves),
        Command::Moves { rules, moves } => run_moves(rules, &moves),
    }
}

/// Load rules and replay moves, stopping at the first rejected one.
#[instrument(skip(moves), fields(move_count = moves.len()))]
fn replay(rules: Option<PathBuf>, moves: &[String]) -> Result<Game> {
    let rules = match rules {
        Some(path) => RulesConfig::from_file(&path)
            .with_context(|| format!("Loading rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };
    info!(?rules, "Starting game");

    let mut game = Game::with_rules(rules);
    for token in moves {
        let (from, to) = parse_move(token)?;
        match game.execute_move(from, to) {
            Ok(outcome) => debug!(%token, phase = %outcome.phase, "Applied"),
            Err(e) => {
                warn!(%token, error = %e, "Replay stopped");
                eprintln!("Move {} rejected: {}", token, e);
                break;
            }
        }
    }
    Ok(game)
}

/// Replay and print the position.
fn run_play(rules: Option<PathBuf>, json: bool, moves: &[String]) -> Result<()> {
    let game = replay(rules, moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    print!("{}", game.board());
    println!(
        "Captured: light {}, dark {}",
        game.captured_count(Player::Light),
        game.captured_count(Player::Dark)
    );
    println!("{}", game.phase());
    Ok(())
}

/// Replay and list the legal moves.
fn run_moves(rules: Option<PathBuf>, moves: &[String]) -> Result<()> {
    let game = replay(rules, moves)?;
    println!("{}", game.phase());
    for action in game.legal_moves() {
        println!("{}", action);
    }
    Ok(())
}

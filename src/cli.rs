//! Command-line interface for strictly_checkers.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Checkers - replay and inspect checkers games
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "Type-safe checkers rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply moves from the opening and print the resulting position
    Play {
        /// Path to a rules file (TOML)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Print the game as JSON instead of a board diagram
        #[arg(long)]
        json: bool,

        /// Moves in order, written as `row,col-row,col` (e.g. `2,1-3,2`)
        moves: Vec<String>,
    },

    /// Apply moves, then list the legal moves for the side to play
    Moves {
        /// Path to a rules file (TOML)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Moves in order, written as `row,col-row,col`
        moves: Vec<String>,
    },
}

/// Parses a `row,col-row,col` move token into raw coordinate pairs.
pub fn parse_move(token: &str) -> Result<((i32, i32), (i32, i32))> {
    let (from, to) = token
        .split_once('-')
        .with_context(|| format!("Move `{}` is missing `-`", token))?;
    Ok((parse_square(from)?, parse_square(to)?))
}

fn parse_square(text: &str) -> Result<(i32, i32)> {
    let Some((row, col)) = text.trim().split_once(',') else {
        bail!("Square `{}` must be written as `row,col`", text);
    };
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("Bad row in `{}`", text))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("Bad column in `{}`", text))?;
    Ok((row, col))
}

//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved game (overrides the config file)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board, status and move list
    Show,

    /// Mark a cell for the player to move
    Select {
        /// Cell index 0-8 or a label such as "top-left" or "center"
        #[arg(value_parser = parse_position)]
        cell: Position,
    },

    /// Select an earlier (or later) move by its id
    Jump {
        /// Move id as printed in the move list
        id: u64,
    },

    /// Discard the game and start over
    Restart,

    /// List the moves
    Moves,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}

//! Rewind - command-line tic-tac-toe with a rewindable history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{DirStore, GameSession, Intent, RewindConfig, render, render_moves};
use rewind_tictactoe::MoveId;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}

/// Runs one command against the saved game and returns what to print.
#[instrument(skip(cli), fields(command = ?cli.command))]
fn run(cli: Cli) -> Result<String> {
    let mut config = RewindConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.store_dir {
        config = config.with_store_dir(dir);
    }
    debug!(?config, "Resolved configuration");

    let store = DirStore::new(config.store_dir());
    let mut session = GameSession::open(store, config.storage_key())
        .context("Failed to load saved game")?;

    let intent = match cli.command {
        Command::Show => return Ok(render(session.history())),
        Command::Moves => return Ok(render_moves(session.history())),
        Command::Select { cell } => Intent::Select(cell),
        Command::Jump { id } => Intent::JumpTo(MoveId::new(id)),
        Command::Restart => Intent::Restart,
    };

    let history = session.apply(intent)?;
    Ok(render(history))
}

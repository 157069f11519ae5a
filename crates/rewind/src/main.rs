//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, EffectsConfig};
use rewind_tictactoe::Game;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!(dims = cli.dims, config = %cli.config.display(), "Starting Rewind");

    let mut config = EffectsConfig::load(&cli.config)?;
    if cli.no_sound {
        config.mute();
    }
    if cli.no_confetti {
        config.disable_confetti();
    }

    let game = Game::new(usize::from(cli.dims))?;
    rewind::tui::run(game, &config)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

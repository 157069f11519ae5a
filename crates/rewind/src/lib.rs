//! Rewind - tic-tac-toe with time travel, in the terminal
//!
//! The game rules live in [`rewind_tictactoe`]; this crate is the
//! presentation layer around them.
//!
//! # Architecture
//!
//! - **CLI**: board size, config and log file paths
//! - **Config**: confetti and sound parameters loaded from TOML
//! - **TUI**: board, move list and status line rendered with ratatui;
//!   mouse and keyboard input mapped to `play` / `jump_to`
//! - **Effects**: confetti and terminal-bell cues fired once per
//!   transition into a won or drawn position, never feeding back into
//!   the game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod effects;
pub mod tui;

pub use cli::Cli;
pub use config::{ConfettiConfig, ConfigError, EffectsConfig, SoundConfig};

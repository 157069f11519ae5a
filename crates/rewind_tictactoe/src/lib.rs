//! Rewind tic-tac-toe - pure game logic with time travel
//!
//! This crate holds the whole rule set of an NxN tic-tac-toe game and
//! nothing else: no rendering, no audio, no I/O.
//!
//! # Architecture
//!
//! - **Board**: `dims * dims` squares in row-major order
//! - **Rules**: pure win/draw detection over generated lines
//! - **History**: one owned board snapshot per move, plus the square played
//! - **Game**: `play` and `jump_to` over the history, with contracts and
//!   invariants checked on every accepted move
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(3)?;
//! for index in [0, 4, 1, 5, 8] {
//!     game.play(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! game.play(2)?;
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Branch from the past: the old future is dropped on the next move.
//! game.jump_to(0)?;
//! game.play(2)?;
//! assert_eq!(game.history().len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod history;
pub mod invariants;
mod rules;
mod types;

pub use contracts::{Contract, GameNotOver, InBounds, LegalPlay, PlayContract, SquareIsEmpty};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use history::HistoryEntry;
pub use rules::{is_draw, is_full, lines, status, winner, winning_line};
pub use types::{Board, GameStatus, MIN_DIMS, Player, Square};

/// Alias for clarity in the presentation layer.
pub type Mark = Player;

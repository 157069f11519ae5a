//! Celebration effects fired when a game is won or drawn.
//!
//! Effects observe status transitions and never touch the game.

mod confetti;
mod sound;

pub use confetti::{ConfettiBurst, ConfettiLayer, Particle};
pub use sound::{CueSink, Muted, SoundCue, TerminalBell};

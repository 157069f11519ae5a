//! Audio cues.

use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// A sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SoundCue {
    /// A player completed a line.
    Victory,
    /// The board filled with no winner.
    Draw,
}

impl SoundCue {
    /// Number of bell rings for this cue.
    pub fn rings(self) -> usize {
        match self {
            SoundCue::Victory => 1,
            SoundCue::Draw => 2,
        }
    }
}

/// Destination for audio cues.
pub trait CueSink {
    /// Plays `cue`, observed at `now`.
    ///
    /// Sinks may drop cues (throttling, muting); that is not an error.
    fn play(&mut self, cue: SoundCue, now: Instant) -> io::Result<()>;
}

/// Rings the terminal bell.
///
/// Cues arriving less than `throttle` after the last rung cue are dropped.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    throttle: Duration,
    last: Option<Instant>,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W, throttle: Duration) -> Self {
        Self {
            out,
            throttle,
            last: None,
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    #[instrument(skip(self, now))]
    fn play(&mut self, cue: SoundCue, now: Instant) -> io::Result<()> {
        if self
            .last
            .is_some_and(|last| now.saturating_duration_since(last) < self.throttle)
        {
            debug!("Cue throttled");
            return Ok(());
        }
        self.last = Some(now);
        self.out.write_all("\x07".repeat(cue.rings()).as_bytes())?;
        self.out.flush()?;
        debug!("Bell rung");
        Ok(())
    }
}

/// Swallows every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl CueSink for Muted {
    fn play(&mut self, _cue: SoundCue, _now: Instant) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victory_rings_once_draw_twice() {
        let now = Instant::now();
        let mut bell = TerminalBell::new(Vec::new(), Duration::ZERO);
        bell.play(SoundCue::Victory, now).unwrap();
        assert_eq!(bell.out, b"\x07");
        bell.play(SoundCue::Draw, now).unwrap();
        assert_eq!(bell.into_inner(), b"\x07\x07\x07");
    }

    #[test]
    fn test_throttle_drops_rapid_cues() {
        let start = Instant::now();
        let mut bell = TerminalBell::new(Vec::new(), Duration::from_millis(100));
        bell.play(SoundCue::Victory, start).unwrap();
        bell.play(SoundCue::Victory, start + Duration::from_millis(50))
            .unwrap();
        assert_eq!(bell.out.len(), 1);
        bell.play(SoundCue::Victory, start + Duration::from_millis(150))
            .unwrap();
        assert_eq!(bell.out.len(), 2);
    }

    #[test]
    fn test_muted_plays_nothing() {
        assert!(Muted.play(SoundCue::Draw, Instant::now()).is_ok());
    }
}

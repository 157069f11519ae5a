//! Detects the moment a shown board becomes won or drawn.

use crate::effects::SoundCue;
use rewind_tictactoe::{GameStatus, Player};
use tracing::debug;

/// A one-shot celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    /// The player completed a line.
    Victory(Player),
    /// The board filled with no winner.
    Draw,
}

impl Celebration {
    /// Sound for this celebration.
    pub fn cue(self) -> SoundCue {
        match self {
            Celebration::Victory(_) => SoundCue::Victory,
            Celebration::Draw => SoundCue::Draw,
        }
    }

    /// Confetti is for winners only.
    pub fn wants_confetti(self) -> bool {
        matches!(self, Celebration::Victory(_))
    }
}

/// Edge trigger on the displayed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    last: GameStatus,
}

impl Feedback {
    /// Starts observing from `initial`, which never fires.
    pub fn new(initial: GameStatus) -> Self {
        Self { last: initial }
    }

    /// Records `status`, returning a celebration if it just became final.
    pub fn observe(&mut self, status: GameStatus) -> Option<Celebration> {
        if status == self.last {
            return None;
        }
        debug!(from = ?self.last, to = ?status, "Status changed");
        self.last = status;
        match status {
            GameStatus::Won(player) => Some(Celebration::Victory(player)),
            GameStatus::Draw => Some(Celebration::Draw),
            GameStatus::InProgress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_win() {
        let mut feedback = Feedback::new(GameStatus::InProgress);
        assert_eq!(feedback.observe(GameStatus::InProgress), None);
        assert_eq!(
            feedback.observe(GameStatus::Won(Player::O)),
            Some(Celebration::Victory(Player::O))
        );
        assert_eq!(feedback.observe(GameStatus::Won(Player::O)), None);
    }

    #[test]
    fn test_refires_after_leaving_and_returning() {
        let mut feedback = Feedback::new(GameStatus::InProgress);
        assert!(feedback.observe(GameStatus::Draw).is_some());
        assert_eq!(feedback.observe(GameStatus::InProgress), None);
        assert_eq!(feedback.observe(GameStatus::Draw), Some(Celebration::Draw));
    }

    #[test]
    fn test_initial_status_is_silent() {
        let mut feedback = Feedback::new(GameStatus::Won(Player::X));
        assert_eq!(feedback.observe(GameStatus::Won(Player::X)), None);
    }

    #[test]
    fn test_cues() {
        assert_eq!(Celebration::Victory(Player::X).cue(), SoundCue::Victory);
        assert_eq!(Celebration::Draw.cue(), SoundCue::Draw);
        assert!(!Celebration::Draw.wants_confetti());
    }
}

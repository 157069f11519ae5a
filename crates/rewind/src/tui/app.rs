//! Application state and logic.

use super::feedback::{Celebration, Feedback};
use super::input::{Action, action_for_key, move_cursor};
use super::ui::{HitMap, Target};
use crate::config::{ConfettiConfig, ConfigError, EffectsConfig};
use crate::effects::{ConfettiBurst, CueSink};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;
use rewind_tictactoe::Game;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App {
    game: Game,
    cursor: usize,
    feedback: Feedback,
    confetti: Option<ConfettiBurst>,
    confetti_config: ConfettiConfig,
    palette: Vec<Color>,
    sound: Box<dyn CueSink>,
    hits: HitMap,
    rng: SmallRng,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    ///
    /// `seed` drives the confetti so runs can be replayed.
    pub fn new(
        game: Game,
        config: &EffectsConfig,
        sound: Box<dyn CueSink>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let palette = config.confetti().palette()?;
        let cursor = game.board().len() / 2;
        let feedback = Feedback::new(game.status());
        Ok(Self {
            game,
            cursor,
            feedback,
            confetti: None,
            confetti_config: config.confetti().clone(),
            palette,
            sound,
            hits: HitMap::default(),
            rng: SmallRng::seed_from_u64(seed),
            should_quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor square.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the running confetti burst, if any.
    pub fn confetti(&self) -> Option<&ConfettiBurst> {
        self.confetti.as_ref()
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Checks if an effect needs frames.
    pub fn is_animating(&self) -> bool {
        self.confetti.is_some()
    }

    /// Stores the clickable regions of the frame just drawn.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(action) = action_for_key(key, self.game.dims()) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Play(index) => self.play(index, now),
            Action::PlayCursor => self.play(self.cursor, now),
            Action::MoveCursor(code) => {
                self.cursor = move_cursor(self.cursor, self.game.dims(), code);
            }
            Action::StepBack => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step, now);
                }
            }
            Action::StepForward => self.jump(self.game.step() + 1, now),
            Action::First => self.jump(0, now),
            Action::Last => self.jump(self.game.history().len() - 1, now),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event against the last drawn frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hits.target_at(mouse.column, mouse.row) {
            Some(Target::Cell(index)) => {
                self.cursor = index;
                self.play(index, now);
            }
            Some(Target::Step(step)) => self.jump(step, now),
            None => debug!(column = mouse.column, row = mouse.row, "Click outside targets"),
        }
    }

    /// Plays `index` for the player to move, ignoring rejected moves.
    #[instrument(skip(self, now))]
    pub fn play(&mut self, index: usize, now: Instant) {
        match self.game.play(index) {
            Ok(_) => self.observe(now),
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    /// Shows history entry `step`, ignoring steps that don't exist.
    #[instrument(skip(self, now))]
    pub fn jump(&mut self, step: usize, now: Instant) {
        match self.game.jump_to(step) {
            Ok(()) => self.observe(now),
            Err(e) => debug!(error = %e, "Ignoring jump"),
        }
    }

    /// Advances running effects by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(burst) = &mut self.confetti {
            burst.advance(dt);
            if burst.is_finished() {
                debug!("Confetti finished");
                self.confetti = None;
            }
        }
    }

    fn observe(&mut self, now: Instant) {
        if let Some(celebration) = self.feedback.observe(self.game.status()) {
            self.celebrate(celebration, now);
        }
    }

    fn celebrate(&mut self, celebration: Celebration, now: Instant) {
        info!(?celebration, "Celebrating");
        if celebration.wants_confetti() && *self.confetti_config.enabled() {
            self.confetti = Some(ConfettiBurst::new(
                &self.confetti_config,
                &self.palette,
                self.rng.random(),
            ));
        }
        if let Err(e) = self.sound.play(celebration.cue(), now) {
            warn!(error = %e, "Failed to play sound cue");
        }
    }
}

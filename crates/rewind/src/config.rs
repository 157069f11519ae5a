//! Effects configuration: confetti and sound parameters.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Confetti burst parameters.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfettiConfig {
    /// Whether a win fires confetti at all.
    enabled: bool,

    /// Launch direction in degrees (90 is straight up).
    angle: f32,

    /// Width of the launch cone in degrees.
    spread: f32,

    /// Initial particle speed.
    start_velocity: f32,

    /// Number of particles per burst.
    element_count: usize,

    /// Fraction of velocity lost per frame.
    drag_friction: f32,

    /// Lifetime of a burst in milliseconds.
    duration_ms: u64,

    /// Delay between consecutive particle launches in milliseconds.
    stagger_ms: u64,

    /// Particle colours as `#rrggbb`.
    colors: Vec<String>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            angle: 60.0,
            spread: 45.0,
            start_velocity: 30.0,
            element_count: 50,
            drag_friction: 0.1,
            duration_ms: 3000,
            stagger_ms: 0,
            colors: ["#a864fd", "#29cdff", "#78ff44", "#ff718d", "#fdff6a"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ConfettiConfig {
    /// Burst lifetime.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Delay between particle launches.
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    /// Parses the colour list.
    #[instrument(skip(self), fields(count = self.colors.len()))]
    pub fn palette(&self) -> Result<Vec<Color>, ConfigError> {
        self.colors
            .iter()
            .map(|hex| {
                hex.parse::<Color>()
                    .map_err(|_| ConfigError::new(format!("Invalid confetti colour {:?}", hex)))
            })
            .collect()
    }
}

/// Audio cue parameters.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoundConfig {
    /// Whether wins and draws ring the bell.
    enabled: bool,

    /// Minimum gap between two cues in milliseconds.
    throttle_ms: u64,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            throttle_ms: 100,
        }
    }
}

impl SoundConfig {
    /// Minimum gap between two cues.
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

/// All effect settings.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    /// Confetti settings.
    confetti: ConfettiConfig,

    /// Sound settings.
    sound: SoundConfig,
}

impl EffectsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values that serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let palette = self.confetti.palette()?;
        if palette.is_empty() && self.confetti.element_count > 0 {
            return Err(ConfigError::new("Confetti needs at least one colour"));
        }
        if !(0.0..1.0).contains(&self.confetti.drag_friction) {
            return Err(ConfigError::new(format!(
                "drag_friction must be in [0, 1), got {}",
                self.confetti.drag_friction
            )));
        }
        if !self.confetti.start_velocity.is_finite() || self.confetti.start_velocity < 0.0 {
            return Err(ConfigError::new("start_velocity must be a non-negative number"));
        }
        if !self.confetti.angle.is_finite() || !self.confetti.spread.is_finite() {
            return Err(ConfigError::new("angle and spread must be finite"));
        }
        if self.confetti.spread < 0.0 {
            return Err(ConfigError::new("spread must not be negative"));
        }
        Ok(())
    }

    /// Turns the bell off.
    pub fn mute(&mut self) {
        self.sound.enabled = false;
    }

    /// Turns confetti off.
    pub fn disable_confetti(&mut self) {
        self.confetti.enabled = false;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

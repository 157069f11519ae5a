//! Confetti particle burst.
//!
//! Positions are in terminal cells relative to the burst origin, with `y`
//! growing downwards. Horizontal motion is doubled because a cell is about
//! twice as tall as it is wide.

use crate::config::ConfettiConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    widgets::Widget,
};
use std::time::Duration;
use tracing::{debug, instrument};

/// Rows per second squared.
const GRAVITY: f32 = 9.0;

/// Drag is specified per frame at this rate.
const FRAMES_PER_SECOND: f32 = 60.0;

/// Horizontal stretch for the cell aspect ratio.
const ASPECT: f32 = 2.0;

const SHAPES: [char; 4] = ['■', '▲', '●', '◆'];

/// One piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    delay: Duration,
    color: Color,
    shape: char,
}

impl Particle {
    /// Offset from the origin in cells, rounded.
    pub fn offset(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }

    /// Particle colour.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A single burst of confetti.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    elapsed: Duration,
    duration: Duration,
    drag: f32,
}

impl ConfettiBurst {
    /// Launches a burst with the given parameters.
    ///
    /// The same `seed` always produces the same burst.
    #[instrument(skip(config, palette), fields(count = config.element_count()))]
    pub fn new(config: &ConfettiConfig, palette: &[Color], seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let half_spread = config.spread() / 2.0;
        let stagger = config.stagger();

        let particles = (0..*config.element_count())
            .map(|i| {
                let degrees = config.angle() + rng.random_range(-half_spread..=half_spread);
                let radians = degrees.to_radians();
                let speed = config.start_velocity() * rng.random_range(0.5..=1.0);
                let color = if palette.is_empty() {
                    Color::White
                } else {
                    palette[rng.random_range(0..palette.len())]
                };
                Particle {
                    x: 0.0,
                    y: 0.0,
                    vx: speed * radians.cos() * ASPECT,
                    vy: -speed * radians.sin(),
                    delay: stagger.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)),
                    color,
                    shape: SHAPES[rng.random_range(0..SHAPES.len())],
                }
            })
            .collect::<Vec<_>>();

        debug!(particles = particles.len(), "Confetti launched");
        Self {
            particles,
            elapsed: Duration::ZERO,
            duration: config.duration(),
            drag: *config.drag_friction(),
        }
    }

    /// Moves the burst forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if self.is_finished() {
            return;
        }
        let start = self.elapsed;
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let keep = (1.0 - self.drag).powf(dt.as_secs_f32() * FRAMES_PER_SECOND);

        for p in &mut self.particles {
            if p.delay >= self.elapsed {
                continue;
            }
            // Only the part of `dt` after launch counts.
            let live = (self.elapsed - start.max(p.delay)).as_secs_f32();
            p.vx *= keep;
            p.vy = p.vy * keep + GRAVITY * live;
            p.x += p.vx * live;
            p.y += p.vy * live;
        }
    }

    /// Checks if the burst has run its full duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of the duration elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// All particles, launched or not.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles to draw, with their glyph for the current fade level.
    pub fn visible(&self) -> impl Iterator<Item = (&Particle, char)> + '_ {
        let progress = self.progress();
        let finished = self.is_finished();
        self.particles
            .iter()
            .filter(move |p| !finished && p.delay < self.elapsed)
            .map(move |p| {
                let glyph = if progress < 0.6 {
                    p.shape
                } else if progress < 0.85 {
                    '•'
                } else {
                    '·'
                };
                (p, glyph)
            })
    }
}

/// Draws a burst over whatever is already in the buffer.
#[derive(Debug)]
pub struct ConfettiLayer<'a> {
    burst: &'a ConfettiBurst,
    origin: Position,
}

impl<'a> ConfettiLayer<'a> {
    /// Draws `burst` with its origin at `origin`.
    pub fn new(burst: &'a ConfettiBurst, origin: Position) -> Self {
        Self { burst, origin }
    }
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (particle, glyph) in self.burst.visible() {
            let (dx, dy) = particle.offset();
            let x = i32::from(self.origin.x) + dx;
            let y = i32::from(self.origin.y) + dy;
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            let pos = Position::new(x, y);
            if !area.contains(pos) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(glyph).set_fg(particle.color);
            }
        }
    }
}

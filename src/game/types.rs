//! Entity state for a flappy session: the bird, the pipes and the session lifecycle.

use crate::constants::{
    BIRD_SPRITE_HEIGHT, BIRD_SPRITE_WIDTH, BIRD_X, FIELD_HEIGHT, FIELD_WIDTH, FLAP_VELOCITY,
    GRAVITY, PIPE_GAP, PIPE_SPEED, PIPE_TOP_MIN, PIPE_TOP_RANGE, PIPE_WIDTH,
};
use rand::Rng;

/// The player-controlled sprite. Only `y` and `velocity` ever change.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position of the sprite's left edge.
    pub x: f64,
    /// Top edge of the sprite. Not clamped to the field.
    pub y: f64,
    /// Vertical velocity in field units per tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// A bird resting at mid-height.
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: FIELD_HEIGHT / 2.0,
            velocity: 0.0,
        }
    }

    /// Integrate one tick of gravity.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Override the current velocity with the flap velocity.
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Bird collision box, taken from the bird sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SpriteSize {
    fn default() -> Self {
        Self {
            width: BIRD_SPRITE_WIDTH,
            height: BIRD_SPRITE_HEIGHT,
        }
    }
}

/// A top + bottom barrier pair sharing one horizontal position.
///
/// `top_height + PIPE_GAP + bottom_height == FIELD_HEIGHT` for every pipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    /// Height of the top barrier, measured down from the ceiling.
    pub top_height: f64,
    /// Height of the bottom barrier, measured up from the floor.
    pub bottom_height: f64,
}

impl Pipe {
    /// Spawn a pipe just off the right edge with a random gap.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let top_height = rng.gen_range(0.0..PIPE_TOP_RANGE) + PIPE_TOP_MIN;
        Self::with_top_height(FIELD_WIDTH, top_height)
    }

    /// Build a pipe at `x` whose top barrier is `top_height` tall.
    pub fn with_top_height(x: f64, top_height: f64) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            top_height,
            bottom_height: FIELD_HEIGHT - top_height - PIPE_GAP,
        }
    }

    /// Scroll one tick to the left.
    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Field y where the gap opens (bottom of the top barrier).
    pub fn gap_top(&self) -> f64 {
        self.top_height
    }

    /// Field y where the gap closes (top of the bottom barrier).
    pub fn gap_bottom(&self) -> f64 {
        FIELD_HEIGHT - self.bottom_height
    }
}

/// Session lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Stopped,
}

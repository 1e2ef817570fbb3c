//! Collision and scoring predicates.
//!
//! Pure functions over entity state; the session decides what to do with them.

use super::types::{Bird, Pipe, SpriteSize};

/// Axis-aligned test of the bird box against the pipe's gap.
///
/// True when the bird overlaps the pipe horizontally and any part of it
/// sticks out of the gap vertically.
pub fn collides(bird: &Bird, size: SpriteSize, pipe: &Pipe) -> bool {
    let overlaps_horizontally = bird.x + size.width > pipe.x && bird.x < pipe.x + pipe.width;
    if !overlaps_horizontally {
        return false;
    }
    bird.y < pipe.gap_top() || bird.y + size.height > pipe.gap_bottom()
}

/// True on the single tick where the pipe's left edge sits exactly one pipe
/// width behind the bird.
///
/// Exact equality only holds because pipes spawn on integral x and move by an
/// integral speed.
#[allow(clippy::float_cmp)]
pub fn is_scoring_position(bird: &Bird, pipe: &Pipe) -> bool {
    pipe.x == bird.x - pipe.width
}

/// True once the pipe's right edge has left the field.
pub fn is_off_screen(pipe: &Pipe) -> bool {
    pipe.x + pipe.width < 0.0
}

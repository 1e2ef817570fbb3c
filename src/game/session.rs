//! One play-through: the bird, the active pipes, score and frame counter.

use super::collision::{collides, is_off_screen, is_scoring_position};
use super::types::{Bird, Pipe, SessionState, SpriteSize};
use crate::constants::PIPE_SPAWN_INTERVAL;
use rand::Rng;
use tracing::{debug, info, warn};

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not running; nothing changed.
    Inactive,
    /// The tick completed and the session is still running.
    Continue,
    /// The bird hit a pipe on this tick and the session stopped.
    GameOver,
}

/// Game session state.
///
/// `pipes` is kept in spawn order, which is also left-to-right on screen.
#[derive(Debug, Clone)]
pub struct Session {
    pub bird: Bird,
    pub bird_size: SpriteSize,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub frame_count: u64,
    pub state: SessionState,
}

impl Session {
    /// Create an idle session. Call [`Session::start`] to begin play.
    pub fn new(bird_size: SpriteSize) -> Self {
        Self {
            bird: Bird::new(),
            bird_size,
            pipes: Vec::new(),
            score: 0,
            frame_count: 0,
            state: SessionState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.state == SessionState::Stopped
    }

    /// Idle -> Running. Seeds the first pipe and resets the frame counter.
    ///
    /// Returns false (and changes nothing) if the session already left Idle.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.state != SessionState::Idle {
            warn!(state = ?self.state, "start ignored, session already started");
            return false;
        }
        self.state = SessionState::Running;
        self.pipes.push(Pipe::spawn(rng));
        self.frame_count = 0;
        info!("session started");
        true
    }

    /// Apply a flap input. Ignored unless the session is running.
    pub fn flap(&mut self) {
        if self.is_running() {
            self.bird.flap();
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Inactive;
        }

        self.bird.update();

        // Walk back to front so removal doesn't disturb the unvisited indices
        for i in (0..self.pipes.len()).rev() {
            self.pipes[i].update();

            if collides(&self.bird, self.bird_size, &self.pipes[i]) {
                self.state = SessionState::Stopped;
                info!(
                    score = self.score,
                    frame = self.frame_count,
                    bird_y = self.bird.y,
                    "bird hit a pipe, game over"
                );
                return TickOutcome::GameOver;
            }

            if is_scoring_position(&self.bird, &self.pipes[i]) {
                self.score += 1;
                info!(score = self.score, frame = self.frame_count, "scored");
            }

            if is_off_screen(&self.pipes[i]) {
                self.pipes.remove(i);
            }
        }

        if self.frame_count % PIPE_SPAWN_INTERVAL == 0 {
            let pipe = Pipe::spawn(rng);
            debug!(
                frame = self.frame_count,
                top_height = pipe.top_height,
                "spawned pipe"
            );
            self.pipes.push(pipe);
        }

        self.frame_count += 1;
        TickOutcome::Continue
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SpriteSize::default())
    }
}

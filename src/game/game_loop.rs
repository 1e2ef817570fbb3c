//! Frame-driven loop that owns the session and talks to the renderer and input.
//!
//! Single threaded: input is drained between frames, then the session is
//! advanced exactly one tick and redrawn. Once the session stops, the loop
//! stops re-arming the frame clock and only waits for a restart or quit.

use super::session::{Session, TickOutcome};
use super::types::SpriteSize;
use crate::input::{Command, InputSource};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// How long to block for input while no frames are scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Draws the current session state.
pub trait Renderer {
    /// Draw one frame. A stopped session is drawn with the game-over overlay.
    fn draw(&mut self, session: &Session) -> io::Result<()>;
}

/// Whether the loop should keep going after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct GameLoop<R, I, V> {
    session: Session,
    bird_size: SpriteSize,
    frame_interval: Duration,
    rng: R,
    input: I,
    renderer: V,
}

impl<R: Rng, I: InputSource, V: Renderer> GameLoop<R, I, V> {
    pub fn new(
        bird_size: SpriteSize,
        frame_interval: Duration,
        rng: R,
        input: I,
        renderer: V,
    ) -> Self {
        Self {
            session: Session::new(bird_size),
            bird_size,
            frame_interval,
            rng,
            input,
            renderer,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    /// Start the current session and draw its first frame.
    pub fn start(&mut self) -> io::Result<()> {
        self.session.start(&mut self.rng);
        self.renderer.draw(&self.session)
    }

    /// Advance one tick and draw the result.
    ///
    /// A tick that ends the session draws the game-over frame; an inactive
    /// session is not redrawn.
    pub fn step(&mut self) -> io::Result<TickOutcome> {
        let outcome = self.session.tick(&mut self.rng);
        if outcome != TickOutcome::Inactive {
            self.renderer.draw(&self.session)?;
        }
        Ok(outcome)
    }

    /// Apply a player command.
    pub fn handle(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Flap => self.session.flap(),
            Command::Restart => {
                if self.session.is_stopped() {
                    info!(previous_score = self.session.score, "restarting");
                    self.session = Session::new(self.bird_size);
                    self.start()?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run until the player quits.
    pub fn run(&mut self) -> io::Result<()> {
        if !self.session.is_running() {
            self.start()?;
        }
        let mut next_frame = Instant::now() + self.frame_interval;

        loop {
            if !self.session.is_running() {
                // No frame is pending; block on input only
                if let Some(command) = self.input.next_command(IDLE_POLL)? {
                    if self.handle(command)? == Flow::Quit {
                        break;
                    }
                    next_frame = Instant::now() + self.frame_interval;
                }
                continue;
            }

            let now = Instant::now();
            if now < next_frame {
                if let Some(command) = self.input.next_command(next_frame - now)? {
                    if self.handle(command)? == Flow::Quit {
                        break;
                    }
                }
                continue;
            }

            self.step()?;
            // Schedule from the deadline, but never try to catch up on missed frames
            next_frame = (next_frame + self.frame_interval).max(Instant::now());
        }

        info!(
            score = self.session.score,
            frames = self.session.frame_count,
            "leaving game loop"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::SessionState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(SessionState, u32, u64)>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, session: &Session) -> io::Result<()> {
            self.frames
                .push((session.state, session.score, session.frame_count));
            Ok(())
        }
    }

    struct Scripted(VecDeque<Option<Command>>);

    impl InputSource for Scripted {
        fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
            let next = self.0.pop_front().unwrap_or(Some(Command::Quit));
            if next.is_none() {
                std::thread::sleep(timeout);
            }
            Ok(next)
        }
    }

    fn game_loop(script: Vec<Option<Command>>) -> GameLoop<ChaCha8Rng, Scripted, Recorder> {
        GameLoop::new(
            SpriteSize::default(),
            Duration::from_millis(1),
            ChaCha8Rng::seed_from_u64(3),
            Scripted(script.into()),
            Recorder::default(),
        )
    }

    #[test]
    fn test_start_draws_first_frame() {
        let mut game = game_loop(vec![]);
        game.start().unwrap();
        assert_eq!(game.renderer().frames, vec![(SessionState::Running, 0, 0)]);
    }

    #[test]
    fn test_step_draws_each_tick() {
        let mut game = game_loop(vec![]);
        game.start().unwrap();
        game.step().unwrap();
        game.step().unwrap();
        assert_eq!(game.renderer().frames.len(), 3);
        assert_eq!(game.renderer().frames[2].2, 2);
    }

    #[test]
    fn test_game_over_draws_terminal_frame_then_nothing() {
        let mut game = game_loop(vec![]);
        game.start().unwrap();
        game.session_mut().bird.velocity = -400.0;
        game.session_mut().pipes[0].x = 60.0;

        assert_eq!(game.step().unwrap(), TickOutcome::GameOver);
        assert_eq!(
            game.renderer().frames.last().map(|f| f.0),
            Some(SessionState::Stopped)
        );
        let drawn = game.renderer().frames.len();
        assert_eq!(game.step().unwrap(), TickOutcome::Inactive);
        assert_eq!(game.renderer().frames.len(), drawn);
    }

    #[test]
    fn test_flap_command_reaches_bird() {
        let mut game = game_loop(vec![]);
        game.start().unwrap();
        assert_eq!(game.handle(Command::Flap).unwrap(), Flow::Continue);
        assert_eq!(game.session().bird.velocity, -8.0);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut game = game_loop(vec![]);
        game.start().unwrap();
        game.step().unwrap();
        game.handle(Command::Restart).unwrap();
        assert_eq!(game.session().frame_count, 1);

        game.session_mut().state = SessionState::Stopped;
        game.session_mut().score = 9;
        game.handle(Command::Restart).unwrap();
        assert!(game.session().is_running());
        assert_eq!(game.session().score, 0);
        assert_eq!(game.session().frame_count, 0);
        assert_eq!(game.session().pipes.len(), 1);
    }

    #[test]
    fn test_quit_command() {
        let mut game = game_loop(vec![]);
        assert_eq!(game.handle(Command::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_run_ticks_until_quit() {
        let mut script = vec![None; 40];
        script.push(Some(Command::Quit));
        let mut game = game_loop(script);
        game.run().unwrap();
        assert!(game.session().frame_count > 0);
        assert!(!game.renderer().frames.is_empty());
    }
}

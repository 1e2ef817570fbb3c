//! Integration test: a full session from start to game over.
//!
//! Walks the session through spawning, scoring, pipe removal and the crash
//! that ends it, with the bird pinned inside a fixed gap so the pipe
//! schedule can be checked tick by tick.

use flappy::game::{Pipe, Session, SessionState, TickOutcome};
use flappy::{BIRD_X, FIELD_HEIGHT, GRAVITY, PIPE_WIDTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GAP_TOP: f64 = 200.0;

fn start_session() -> (Session, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut session = Session::default();
    assert!(session.start(&mut rng));
    (session, rng)
}

/// Hold the bird still inside the gap and give every pipe the same gap.
fn pin_inside_gap(session: &mut Session) {
    session.bird.y = GAP_TOP + 30.0;
    session.bird.velocity = -GRAVITY;
    for pipe in &mut session.pipes {
        *pipe = Pipe::with_top_height(pipe.x, GAP_TOP);
    }
}

fn pinned_tick(session: &mut Session, rng: &mut ChaCha8Rng) -> TickOutcome {
    pin_inside_gap(session);
    session.tick(rng)
}

// =============================================================================
// Start and first tick
// =============================================================================

#[test]
fn test_first_tick_moves_bird_and_keeps_score() {
    let (mut session, mut rng) = start_session();
    assert_eq!(session.pipes.len(), 1);
    let start_y = session.bird.y;

    assert_eq!(session.tick(&mut rng), TickOutcome::Continue);

    assert!(session.bird.y > start_y);
    assert_eq!(session.bird.y, start_y + GRAVITY);
    assert_eq!(session.score, 0);
    assert_eq!(session.frame_count, 1);
}

#[test]
fn test_gravity_integration_over_many_ticks() {
    let (mut session, mut rng) = start_session();
    // Keep pipes away from the bird so it can fall freely
    for _ in 0..60 {
        let y = session.bird.y;
        let v = session.bird.velocity;
        assert_eq!(session.tick(&mut rng), TickOutcome::Continue);
        assert_eq!(session.bird.velocity, v + GRAVITY);
        assert_eq!(session.bird.y, y + v + GRAVITY);
    }
}

#[test]
fn test_generated_pipes_keep_fixed_gap() {
    let (mut session, mut rng) = start_session();
    let mut seen = 0;
    for _ in 0..400 {
        pinned_tick(&mut session, &mut rng);
        // The pipe spawned this tick has not been pinned yet
        if let Some(pipe) = session.pipes.last() {
            assert!(pipe.top_height >= 50.0 && pipe.top_height < 250.0);
            assert_eq!(pipe.bottom_height, FIELD_HEIGHT - pipe.top_height - 100.0);
            seen += 1;
        }
    }
    assert!(seen > 0);
    assert!(session.is_running());
}

// =============================================================================
// Scoring and removal
// =============================================================================

#[test]
fn test_score_increments_on_exact_tick() {
    let (mut session, mut rng) = start_session();
    let scoring_x = BIRD_X - PIPE_WIDTH;
    assert_eq!(scoring_x, -2.0);

    // The seed pipe moves 2 units per tick from 288, so it reaches -2 on tick 145
    for _ in 0..144 {
        assert_eq!(pinned_tick(&mut session, &mut rng), TickOutcome::Continue);
        assert_eq!(session.score, 0);
    }
    assert_eq!(session.pipes[0].x, 0.0);

    pinned_tick(&mut session, &mut rng);
    assert_eq!(session.pipes[0].x, scoring_x);
    assert_eq!(session.score, 1);

    // The pipe spawned on frame 0 trails by exactly one tick
    pinned_tick(&mut session, &mut rng);
    assert_eq!(session.score, 2);
}

#[test]
fn test_each_pipe_scores_once() {
    let (mut session, mut rng) = start_session();
    let mut history = Vec::new();
    for _ in 0..240 {
        pinned_tick(&mut session, &mut rng);
        history.push(session.score);
    }
    // Only the seed and frame-0 pipes have passed the bird by now
    assert_eq!(session.score, 2);
    let increments: Vec<u32> = history
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d != 0)
        .collect();
    assert_eq!(increments, vec![1, 1]);
    assert!(history.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_pipe_removed_once_fully_off_screen() {
    let (mut session, mut rng) = start_session();
    // Seed pipe hits x = -52 after 170 moves and -54 after 171
    for _ in 0..170 {
        pinned_tick(&mut session, &mut rng);
    }
    assert_eq!(session.pipes[0].x, -52.0);
    let count = session.pipes.len();

    pinned_tick(&mut session, &mut rng);
    assert_eq!(session.pipes.len(), count - 1);
    assert!(session.pipes.iter().all(|p| p.x + p.width >= 0.0));

    // The frame-0 pipe follows on the next tick
    pinned_tick(&mut session, &mut rng);
    assert_eq!(session.pipes.len(), count - 2);
    assert!(session.pipes.iter().all(|p| p.x > 0.0));
}

// =============================================================================
// Game over
// =============================================================================

#[test]
fn test_forced_climb_into_pipe_stops_session() {
    let (mut session, mut rng) = start_session();
    // Bring the seed pipe over the bird
    for _ in 0..110 {
        pinned_tick(&mut session, &mut rng);
    }
    assert!(session.is_running());
    let pipe_x = session.pipes[0].x;
    assert!(BIRD_X + session.bird_size.width > pipe_x && BIRD_X < pipe_x + PIPE_WIDTH);

    // Inject an upward velocity that carries the bird above the gap
    session.bird.velocity = -60.0;
    assert_eq!(session.tick(&mut rng), TickOutcome::GameOver);
    assert_eq!(session.state, SessionState::Stopped);
    assert!(session.bird.y < session.pipes[0].top_height);

    let frozen = session.clone();
    for _ in 0..20 {
        assert_eq!(session.tick(&mut rng), TickOutcome::Inactive);
        session.flap();
    }
    assert_eq!(session.bird, frozen.bird);
    assert_eq!(session.pipes, frozen.pipes);
    assert_eq!(session.score, frozen.score);
    assert_eq!(session.frame_count, frozen.frame_count);
}

#[test]
fn test_unattended_bird_eventually_crashes() {
    let (mut session, mut rng) = start_session();
    let mut outcome = TickOutcome::Continue;
    for _ in 0..500 {
        outcome = session.tick(&mut rng);
        if outcome != TickOutcome::Continue {
            break;
        }
    }
    assert_eq!(outcome, TickOutcome::GameOver);
    assert_eq!(session.score, 0);
}

//! Flappy simulation.
//!
//! A bird falls under constant gravity and rises on flap while pipe pairs
//! scroll in from the right. Passing a pipe scores a point; touching one
//! ends the session.

pub mod collision;
pub mod game_loop;
pub mod session;
pub mod types;

pub use collision::*;
pub use game_loop::{Flow, GameLoop, Renderer};
pub use session::*;
pub use types::*;

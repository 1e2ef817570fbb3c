//! Flappy - terminal Flappy Bird.
//!
//! This module exposes the simulation for testing and for the binary.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use config::GameConfig;
pub use constants::*;
pub use game::{GameLoop, Session, SessionState, TickOutcome};

//! Keyboard input: maps terminal key events to session commands.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Player commands understood by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap (Space, Up or Enter).
    Flap,
    /// Start a fresh session after game over (R).
    Restart,
    /// Leave the game (Q, Esc or Ctrl-C).
    Quit,
}

/// Source of player commands.
pub trait InputSource {
    /// Wait up to `timeout` for the next command.
    ///
    /// Returns `Ok(None)` when the timeout elapses or the event was not a command.
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Translate a key event into a command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Command::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Reads commands from the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(command_for_key(key)),
            _ => Ok(None),
        }
    }
}

//! Terminal rendering with ratatui.

pub mod scene;
pub mod sprites;

use crate::game::{Renderer, Session};
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use scene::render_flappy;
use sprites::Sprites;
use std::io::{self, Write};

/// Turn raw mode off and leave the alternate screen on `out`.
///
/// Both steps always run; the first error is returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    raw.and(screen)
}

/// Draws sessions onto a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    sprites: Sprites,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            sprites: Sprites::default(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<W: Write> TerminalRenderer<CrosstermBackend<W>> {
    /// Hand the terminal back to the shell through the backend's writer.
    pub fn restore(&mut self) -> io::Result<()> {
        restore_terminal(self.terminal.backend_mut())
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, session: &Session) -> io::Result<()> {
        let sprites = &self.sprites;
        self.terminal
            .draw(|frame| render_flappy(frame, frame.size(), session, sprites))?;
        Ok(())
    }
}

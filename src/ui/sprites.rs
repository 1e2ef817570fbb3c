//! Visual assets: background, bird and pipe sprites as terminal glyphs.

use ratatui::style::{Color, Modifier, Style};

/// A single-cell sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub style: Style,
}

impl Glyph {
    const fn new(symbol: &'static str, style: Style) -> Self {
        Self { symbol, style }
    }
}

/// The three visual assets used by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprites {
    pub background: Glyph,
    pub pipe: Glyph,
    pub pipe_cap: Glyph,
    pub bird_rising: Glyph,
    pub bird_gliding: Glyph,
    pub bird_falling: Glyph,
}

impl Default for Sprites {
    fn default() -> Self {
        let sky = Color::Rgb(112, 197, 206);
        let bird = Style::default()
            .fg(Color::Yellow)
            .bg(sky)
            .add_modifier(Modifier::BOLD);
        Self {
            background: Glyph::new(" ", Style::default().bg(sky)),
            pipe: Glyph::new("█", Style::default().fg(Color::Green).bg(sky)),
            pipe_cap: Glyph::new("▓", Style::default().fg(Color::LightGreen).bg(sky)),
            bird_rising: Glyph::new("▲", bird),
            bird_gliding: Glyph::new("►", bird),
            bird_falling: Glyph::new("▼", bird),
        }
    }
}

impl Sprites {
    /// Pick the bird frame for the current vertical velocity.
    pub fn bird(&self, velocity: f64) -> Glyph {
        if velocity < 0.0 {
            self.bird_rising
        } else if velocity > 4.0 {
            self.bird_falling
        } else {
            self.bird_gliding
        }
    }
}

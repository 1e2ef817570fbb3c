//! Draws a session: play field, score overlay, status bar and game-over overlay.

use super::sprites::{Glyph, Sprites};
use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::{Pipe, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    PipeCap,
    Bird,
}

/// Mapping from field units to terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    cols_per_unit: f64,
    rows_per_unit: f64,
}

impl Scale {
    pub fn for_area(area: Rect) -> Self {
        Self {
            cols_per_unit: area.width as f64 / FIELD_WIDTH,
            rows_per_unit: area.height as f64 / FIELD_HEIGHT,
        }
    }

    /// Half-open cell range covering `[start, start + len)` field units.
    fn span(start: f64, len: f64, per_unit: f64) -> (i64, i64) {
        let first = (start * per_unit).floor() as i64;
        let last = ((start + len) * per_unit).ceil() as i64;
        (first, last.max(first + 1))
    }

    /// Field y at the vertical centre of `row`.
    fn row_centre(&self, row: i64) -> f64 {
        (row as f64 + 0.5) / self.rows_per_unit
    }
}

fn pipe_cell(pipe: &Pipe, scale: &Scale, col: i64, row: i64) -> Option<CellKind> {
    let (first, last) = Scale::span(pipe.x, pipe.width, scale.cols_per_unit);
    if col < first || col >= last {
        return None;
    }
    let y = scale.row_centre(row);
    if y < pipe.gap_top() {
        // Last barrier row before the gap gets the cap
        if scale.row_centre(row + 1) >= pipe.gap_top() {
            Some(CellKind::PipeCap)
        } else {
            Some(CellKind::Pipe)
        }
    } else if y > pipe.gap_bottom() {
        if scale.row_centre(row - 1) <= pipe.gap_bottom() {
            Some(CellKind::PipeCap)
        } else {
            Some(CellKind::Pipe)
        }
    } else {
        None
    }
}

/// Classify one play-field cell. The bird is drawn over pipes.
pub fn cell_at(session: &Session, scale: &Scale, col: i64, row: i64) -> CellKind {
    let bird = &session.bird;
    let (bird_c0, bird_c1) = Scale::span(bird.x, session.bird_size.width, scale.cols_per_unit);
    let (bird_r0, bird_r1) = Scale::span(bird.y, session.bird_size.height, scale.rows_per_unit);
    if (bird_c0..bird_c1).contains(&col) && (bird_r0..bird_r1).contains(&row) {
        return CellKind::Bird;
    }

    session
        .pipes
        .iter()
        .find_map(|pipe| pipe_cell(pipe, scale, col, row))
        .unwrap_or(CellKind::Sky)
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, session: &Session, sprites: &Sprites) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play field (top) + status bar (bottom 2 lines)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    render_play_field(frame, chunks[0], session, sprites);
    render_score(frame, chunks[0], session.score);
    render_status_bar(frame, chunks[1], session);

    if session.is_stopped() {
        render_game_over(frame, chunks[0], session.score);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, session: &Session, sprites: &Sprites) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let scale = Scale::for_area(area);
    let bird = sprites.bird(session.bird.velocity);

    let lines: Vec<Line> = (0..area.height as i64)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width as i64)
                .map(|col| {
                    let glyph: Glyph = match cell_at(session, &scale, col, row) {
                        CellKind::Sky => sprites.background,
                        CellKind::Pipe => sprites.pipe,
                        CellKind::PipeCap => sprites.pipe_cap,
                        CellKind::Bird => bird,
                    };
                    Span::styled(glyph.symbol, glyph.style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    let text = format!(" Score: {} ", score);
    let width = (text.chars().count() as u16).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }
    let overlay = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        overlay,
        Rect {
            width,
            height: 1,
            ..area
        },
    );
}

/// Status message (line 1) and key hints (line 2).
fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    if area.height < 1 {
        return;
    }

    let (status, color, controls): (&str, Color, &[(&str, &str)]) = if session.is_stopped() {
        ("Crashed!", Color::Red, &[("[R]", "Restart"), ("[Q/Esc]", "Quit")])
    } else {
        ("Fly!", Color::Green, &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")])
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_game_over(frame: &mut Frame, area: Rect, score: u32) {
    let width = area.width.min(28);
    let height = area.height.min(6);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Score: {}", score)),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

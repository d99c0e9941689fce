// Loading and error screens shown until the roster is ready.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use saroo_app::protocol::LoadPhase;

use crate::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let lines = splash_lines(&state.phase, &state.source);
    let top_pad = (area.height.saturating_sub(2) as usize).saturating_sub(lines.len()) / 2;

    let mut padded = vec![Line::from(""); top_pad];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .centered()
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Message lines for the current load phase.
pub fn splash_lines(phase: &LoadPhase, source: &str) -> Vec<Line<'static>> {
    match phase {
        LoadPhase::Loading => vec![
            Line::from(Span::styled(
                "Loading champions...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(source.to_string(), Style::default().fg(Color::Gray))),
        ],
        LoadPhase::Failed(message) => vec![
            Line::from(Span::styled(
                "Could not load the champion roster",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Check the [roster] section of saroo.toml, then restart. q quits.",
                Style::default().fg(Color::Gray),
            )),
        ],
        LoadPhase::Ready => Vec::new(),
    }
}

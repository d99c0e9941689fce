// Status bar: team names, roster status, board progress, armed champion,
// and the latest notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use saroo_app::protocol::LoadPhase;
use saroo_core::draft::{Side, SlotRef};

use super::side_color;
use crate::ViewState;

/// Render the status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let separator = || Span::styled(" | ", Style::default().fg(Color::Gray));

    let mut spans = vec![
        Span::styled(" saroo ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(
            state.teams.get(Side::Blue).to_string(),
            Style::default().fg(side_color(Side::Blue)),
        ),
        Span::raw(" vs "),
        Span::styled(
            state.teams.get(Side::Red).to_string(),
            Style::default().fg(side_color(Side::Red)),
        ),
        separator(),
    ];

    let (phase_text, phase_color) = phase_indicator(&state.phase, state.roster_size);
    spans.push(Span::styled(phase_text, Style::default().fg(phase_color)));

    spans.push(separator());
    spans.push(Span::styled(
        format!("{}/{} slots", state.board.occupied().count(), SlotRef::all().count()),
        Style::default().fg(Color::White),
    ));

    if let Some(champion) = &state.active {
        spans.push(separator());
        spans.push(Span::styled(
            format!("armed: {}", champion.name_ko),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(notice) = &state.notice {
        spans.push(separator());
        spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Roster status text and colour.
pub fn phase_indicator(phase: &LoadPhase, roster_size: usize) -> (String, Color) {
    match phase {
        LoadPhase::Loading => ("loading roster".to_string(), Color::Yellow),
        LoadPhase::Ready => (format!("{roster_size} champions"), Color::Green),
        LoadPhase::Failed(_) => ("roster unavailable".to_string(), Color::Red),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

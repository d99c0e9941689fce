// Ban row for one side: five cells, each with its label and occupant.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use saroo_core::draft::{Side, SlotIndex, SlotKind, SlotRef, SLOTS_PER_ROW};

use super::{side_color, slot_style, slot_text};
use crate::ViewState;

/// Render `side`'s ban row into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, side: Side) {
    let color = side_color(side);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} bans ", state.teams.get(side)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::horizontal([Constraint::Ratio(1, SLOTS_PER_ROW as u32); SLOTS_PER_ROW])
        .split(inner);

    for (index, cell) in SlotIndex::all().zip(cells.iter()) {
        let slot = SlotRef::new(side, SlotKind::Ban, index);
        frame.render_widget(ban_cell(state, slot), *cell);
    }
}

/// Two-line cell: label on top, occupant below.
fn ban_cell(state: &ViewState, slot: SlotRef) -> Paragraph<'static> {
    let style = slot_style(state, slot);
    let lines = vec![
        Line::from(Span::styled(slot.label(), Style::default().fg(side_color(slot.side)))),
        Line::from(Span::styled(slot_text(state.board.get(slot)), style)),
    ];
    Paragraph::new(lines).centered()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

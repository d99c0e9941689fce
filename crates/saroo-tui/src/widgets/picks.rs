// Pick column for one side: P1..P5 top to bottom.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;
use saroo_core::draft::{Side, SlotIndex, SlotKind, SlotRef};

use super::{side_color, slot_style, slot_text};
use crate::ViewState;

/// Render `side`'s picks into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, side: Side) {
    let color = side_color(side);
    let items: Vec<ListItem> = SlotIndex::all()
        .map(|index| pick_item(state, SlotRef::new(side, SlotKind::Pick, index)))
        .collect();

    let filled = state.board.side(side).picks().iter().flatten().count();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ({}/5) ", state.teams.get(side), filled),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(list, area);
}

/// One pick row: "P1  아리  Ahri", followed by a spacer line.
fn pick_item(state: &ViewState, slot: SlotRef) -> ListItem<'static> {
    let occupant = state.board.get(slot);
    let mut spans = vec![
        Span::styled(format!(" {} ", slot.label()), Style::default().fg(side_color(slot.side))),
        Span::styled(slot_text(occupant), slot_style(state, slot)),
    ];
    if let Some(champion) = occupant {
        if champion.name != champion.name_ko {
            spans.push(Span::styled(
                format!("  {}", champion.name),
                Style::default().fg(Color::Gray),
            ));
        }
    }
    ListItem::new(vec![Line::from(spans), Line::from("")])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

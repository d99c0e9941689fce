// Widgets for each board panel, plus shared slot styling.

pub mod bans;
pub mod champions;
pub mod dialog;
pub mod help_bar;
pub mod picks;
pub mod splash;
pub mod status_bar;

use ratatui::style::{Color, Modifier, Style};
use saroo_core::champion::Champion;
use saroo_core::draft::{Side, SlotRef};

use crate::{Focus, ViewState};

/// Accent colour for a side's borders and team name.
pub fn side_color(side: Side) -> Color {
    match side {
        Side::Blue => Color::LightBlue,
        Side::Red => Color::LightRed,
    }
}

/// Text shown in a slot: the localized name, or a dot when empty.
pub fn slot_text(occupant: Option<&Champion>) -> String {
    match occupant {
        Some(champion) => champion.name_ko.clone(),
        None => "·".to_string(),
    }
}

/// Style for one board slot. The board cursor is only drawn while the board
/// has focus.
pub fn slot_style(state: &ViewState, slot: SlotRef) -> Style {
    let base = match state.board.get(slot) {
        Some(_) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    if state.focus == Focus::Board && state.slot_cursor == slot {
        base.bg(Color::Yellow).fg(Color::Black)
    } else {
        base
    }
}

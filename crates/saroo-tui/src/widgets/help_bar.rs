// Help bar: key hints for the current input mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::{Focus, InputMode, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(&state.mode, state.focus),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn help_text(mode: &InputMode, focus: Focus) -> &'static str {
    match (mode, focus) {
        (InputMode::Search, _) => " type to search | ↑↓:Move | Enter:Done | Esc:Clear",
        (InputMode::Rename { .. }, _) => " Enter:Save | Esc:Cancel | empty name restores default",
        (InputMode::ConfirmQuit, _) => " y:Quit | n:Cancel",
        (InputMode::Normal, Focus::Roster) => {
            " /:Search | ↑↓:Move | Enter:Arm | Tab:Board | n:Rename | x:Reset | q:Quit"
        }
        (InputMode::Normal, Focus::Board) => {
            " ↑↓:Slot | ←→:Side | Enter:Place/Clear | Tab:Champions | n:Rename | x:Reset | q:Quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saroo_core::draft::Side;

    #[test]
    fn hints_follow_mode_and_focus() {
        assert!(help_text(&InputMode::Normal, Focus::Roster).contains("Enter:Arm"));
        assert!(help_text(&InputMode::Normal, Focus::Board).contains("Place/Clear"));
        assert!(help_text(&InputMode::Search, Focus::Board).contains("Esc:Clear"));
        assert!(help_text(&InputMode::ConfirmQuit, Focus::Roster).contains("y:Quit"));
        let rename = InputMode::Rename {
            side: Side::Blue,
            buffer: String::new(),
        };
        assert!(help_text(&rename, Focus::Roster).contains("Esc:Cancel"));
    }
}

// Champion list: ranked search results with selection state.
//
// Active champion highlighted, champions already on the board dimmed and
// struck through, cursor row marked while the list has focus.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;
use saroo_app::protocol::CandidateRow;

use crate::{Focus, InputMode, ViewState};

/// Render the champion list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("이름"),
        Cell::from("Name"),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .candidates
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(row.champion.name_ko.clone()),
                Cell::from(row.champion.name.clone()),
                Cell::from(marker(row)),
            ])
            .style(row_style(row))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Min(12),
        Constraint::Length(6),
    ];

    let border_style = if state.focus == Focus::Roster {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(build_title(state)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let selected = (state.focus == Focus::Roster && !state.candidates.is_empty())
        .then_some(state.roster_cursor);
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Style for one candidate row.
pub fn row_style(row: &CandidateRow) -> Style {
    if row.is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if !row.selectable {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    }
}

/// Short status marker in the last column.
pub fn marker(row: &CandidateRow) -> &'static str {
    if row.is_active {
        "armed"
    } else if !row.selectable {
        "used"
    } else {
        ""
    }
}

/// Title with the query and the result count. A trailing underscore marks
/// the query as being edited.
fn build_title(state: &ViewState) -> Line<'static> {
    let mut title = String::from(" Champions");
    if !state.query.is_empty() || state.mode == InputMode::Search {
        title.push_str(&format!(" /{}", state.query));
        if state.mode == InputMode::Search {
            title.push('_');
        }
    }
    title.push_str(&format!(" ({}/{}) ", state.candidates.len(), state.roster_size));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

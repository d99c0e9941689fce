// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +------------------------+-------------------------+
// | Blue bans (4 rows)      | Red bans (4 rows)       |
// +-----------+------------+------------+------------+
// | Blue      | Champion list (40%)      | Red        |
// | picks     |                          | picks      |
// | (30%)     |                          | (30%)      |
// +-----------+--------------------------+------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use saroo_core::draft::Side;

/// Resolved screen areas for each board zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: team names, roster status, notices.
    pub status_bar: Rect,
    pub blue_bans: Rect,
    pub red_bans: Rect,
    pub blue_picks: Rect,
    /// Centre column: ranked champion list.
    pub champions: Rect,
    pub red_picks: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

impl AppLayout {
    pub fn bans(&self, side: Side) -> Rect {
        match side {
            Side::Blue => self.blue_bans,
            Side::Red => self.red_bans,
        }
    }

    pub fn picks(&self, side: Side) -> Rect {
        match side {
            Side::Blue => self.blue_picks,
            Side::Red => self.red_picks,
        }
    }

    /// Everything between the status bar and the help bar, for the loading
    /// and error screens.
    pub fn body(&self) -> Rect {
        self.blue_bans
            .union(self.red_bans)
            .union(self.blue_picks)
            .union(self.red_picks)
    }
}

/// Build the board layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | bans(4) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(4), // ban rows
            Constraint::Min(7),    // picks + champion list
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let ban_row = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    let bans = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(ban_row);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(middle);

    AppLayout {
        status_bar,
        blue_bans: bans[0],
        red_bans: bans[1],
        blue_picks: columns[0],
        champions: columns[1],
        red_picks: columns[2],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

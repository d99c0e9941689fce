// Terminal draft board: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the latest `AppSnapshot` plus the
// purely local bits (cursors, input mode, the query being typed). The app
// event loop pushes `UiUpdate` messages over an mpsc channel; the TUI applies
// them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use saroo_app::protocol::{AppSnapshot, CandidateRow, LoadPhase, UiUpdate, UserCommand};
use saroo_app::teams::TeamNames;
use saroo_core::champion::Champion;
use saroo_core::draft::{Board, Side, SlotIndex, SlotKind, SlotRef};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which half of the screen the arrow keys drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Roster,
    Board,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Roster => Focus::Board,
            Focus::Board => Focus::Roster,
        }
    }
}

/// Keyboard input mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search query.
    Search,
    /// Editing a team name; `buffer` is committed on Enter.
    Rename { side: Side, buffer: String },
    /// Waiting for y/n on quit.
    ConfirmQuit,
}

/// TUI-local state that mirrors the application state for rendering.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub phase: LoadPhase,
    pub source: String,
    pub roster_size: usize,
    pub candidates: Vec<CandidateRow>,
    pub board: Board,
    pub active: Option<Champion>,
    pub teams: TeamNames,
    /// Query as typed. Sent to the app on every edit.
    pub query: String,
    pub mode: InputMode,
    pub focus: Focus,
    /// Highlighted row in the champion list.
    pub roster_cursor: usize,
    /// Highlighted board slot.
    pub slot_cursor: SlotRef,
    /// Last message from the app, shown in the status bar.
    pub notice: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            phase: LoadPhase::Loading,
            source: String::new(),
            roster_size: 0,
            candidates: Vec::new(),
            board: Board::default(),
            active: None,
            teams: TeamNames::default(),
            query: String::new(),
            mode: InputMode::Normal,
            focus: Focus::Roster,
            roster_cursor: 0,
            slot_cursor: first_slot(),
            notice: None,
        }
    }
}

/// Blue's first ban, where the board cursor starts.
fn first_slot() -> SlotRef {
    SlotRef::new(Side::Blue, SlotKind::Ban, SlotIndex::FIRST)
}

impl ViewState {
    /// Apply a full state snapshot from the app event loop.
    ///
    /// The local query is left alone: it runs ahead of the app while typing.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        self.phase = snapshot.phase;
        self.source = snapshot.source;
        self.roster_size = snapshot.roster_size;
        self.candidates = snapshot.candidates;
        self.board = snapshot.board;
        self.active = snapshot.active;
        self.teams = snapshot.teams;
        self.clamp_cursor();
    }

    /// Keep the roster cursor on an existing row.
    pub fn clamp_cursor(&mut self) {
        self.roster_cursor = self
            .roster_cursor
            .min(self.candidates.len().saturating_sub(1));
    }

    /// The candidate under the roster cursor.
    pub fn highlighted(&self) -> Option<&CandidateRow> {
        self.candidates.get(self.roster_cursor)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::Notice(message) => {
            state.notice = Some(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete board frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);

    if state.phase == LoadPhase::Ready {
        for side in Side::ALL {
            widgets::bans::render(frame, layout.bans(side), state, side);
            widgets::picks::render(frame, layout.picks(side), state, side);
        }
        widgets::champions::render(frame, layout.champions, state);
    } else {
        widgets::splash::render(frame, layout.body(), state);
    }

    widgets::help_bar::render(frame, layout.help_bar, state);

    match &state.mode {
        InputMode::ConfirmQuit => widgets::dialog::render_quit_confirm(frame, frame.area()),
        InputMode::Rename { side, buffer } => {
            widgets::dialog::render_rename(frame, frame.area(), *side, buffer)
        }
        InputMode::Normal | InputMode::Search => {}
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// Initializes the terminal, installs a panic hook that restores it, then
/// selects over UI updates, keyboard input, and render ticks until the user
/// quits or the app closes the update channel.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app event loop
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        debug!("UI channel closed");
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => {
                                let _ = cmd_tx.send(UserCommand::Quit).await;
                                break;
                            }
                            Some(cmd) => {
                                if cmd_tx.send(cmd).await.is_err() {
                                    break;
                                }
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use saroo_core::search::MatchTier;

    fn row(id: &str, name_ko: &str) -> CandidateRow {
        CandidateRow {
            champion: Champion::new(id, "0", id, name_ko, ""),
            tier: MatchTier::Unranked,
            selectable: true,
            is_active: false,
        }
    }

    fn snapshot(rows: Vec<CandidateRow>) -> AppSnapshot {
        AppSnapshot {
            phase: LoadPhase::Ready,
            source: "test".into(),
            roster_size: rows.len(),
            candidates: rows,
            ..AppSnapshot::default()
        }
    }

    fn render_to_string(state: &ViewState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_frame(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn default_view_state() {
        let state = ViewState::default();
        assert_eq!(state.phase, LoadPhase::Loading);
        assert_eq!(state.focus, Focus::Roster);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.slot_cursor, SlotRef::at(Side::Blue, SlotKind::Ban, 0).unwrap());
    }

    #[test]
    fn snapshot_replaces_app_fields_but_keeps_query() {
        let mut state = ViewState {
            query: "아".into(),
            ..ViewState::default()
        };
        apply_ui_update(
            &mut state,
            UiUpdate::Snapshot(Box::new(snapshot(vec![row("Ahri", "아리")]))),
        );
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.candidates.len(), 1);
        assert_eq!(state.query, "아");
    }

    #[test]
    fn snapshot_clamps_cursor() {
        let mut state = ViewState {
            roster_cursor: 5,
            ..ViewState::default()
        };
        state.apply_snapshot(snapshot(vec![row("Ahri", "아리"), row("Zed", "제드")]));
        assert_eq!(state.roster_cursor, 1);
        assert_eq!(state.highlighted().unwrap().champion.id, "Zed");

        state.apply_snapshot(snapshot(Vec::new()));
        assert_eq!(state.roster_cursor, 0);
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn notice_is_stored() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Notice("Draft reset".into()));
        assert_eq!(state.notice.as_deref(), Some("Draft reset"));
    }

    #[test]
    fn focus_toggles() {
        assert_eq!(Focus::Roster.toggle(), Focus::Board);
        assert_eq!(Focus::Board.toggle(), Focus::Roster);
    }

    #[test]
    fn render_loading_screen() {
        let state = ViewState {
            source: "Data Dragon latest (ko_KR)".into(),
            ..ViewState::default()
        };
        let text = render_to_string(&state, 100, 30);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn render_ready_board_with_overlays() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(vec![row("Ahri", "아리"), row("Zed", "제드")]));
        let text = render_to_string(&state, 120, 30);
        assert!(text.contains("Team X"));
        assert!(text.contains("Team Y"));

        state.mode = InputMode::ConfirmQuit;
        let text = render_to_string(&state, 120, 30);
        assert!(text.contains("Quit?"));

        state.mode = InputMode::Rename {
            side: Side::Red,
            buffer: "Gen.G".into(),
        };
        let text = render_to_string(&state, 120, 30);
        assert!(text.contains("Gen.G"));
    }

    #[test]
    fn render_tiny_terminal_does_not_panic() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(vec![row("Ahri", "아리")]));
        render_to_string(&state, 10, 5);
    }
}

// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// event loop, or into local ViewState mutations (cursor movement, focus,
// input modes).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use saroo_app::protocol::UserCommand;
use saroo_core::draft::{Side, SlotIndex, SlotKind, SlotRef};

use super::{Focus, InputMode, ViewState};

/// Rows moved by PageUp/PageDown in the champion list.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app event loop. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports Press and Release for each key; act on Press only.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C quits from any mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match view_state.mode {
        InputMode::ConfirmQuit => handle_confirm_quit(key_event, view_state),
        InputMode::Search => handle_search(key_event, view_state),
        InputMode::Rename { .. } => handle_rename(key_event, view_state),
        InputMode::Normal => handle_normal(key_event, view_state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('/') => {
            view_state.mode = InputMode::Search;
            view_state.focus = Focus::Roster;
            None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            view_state.focus = view_state.focus.toggle();
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            move_vertical(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_vertical(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_roster_cursor(view_state, -(PAGE_SIZE as isize));
            None
        }
        KeyCode::PageDown => {
            move_roster_cursor(view_state, PAGE_SIZE as isize);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            move_side(view_state, Side::Blue);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_side(view_state, Side::Red);
            None
        }

        KeyCode::Enter | KeyCode::Char(' ') => match view_state.focus {
            Focus::Roster => activate_highlighted(view_state),
            Focus::Board => Some(UserCommand::ClickSlot(view_state.slot_cursor)),
        },

        KeyCode::Char('x') => Some(UserCommand::Reset),

        KeyCode::Char('n') => {
            let side = view_state.slot_cursor.side;
            view_state.mode = InputMode::Rename {
                side,
                buffer: view_state.teams.get(side).to_string(),
            };
            None
        }

        // Esc clears a leftover query, otherwise does nothing.
        KeyCode::Esc => {
            if view_state.query.is_empty() {
                None
            } else {
                view_state.query.clear();
                view_state.roster_cursor = 0;
                Some(UserCommand::SetQuery(String::new()))
            }
        }

        KeyCode::Char('q') => {
            view_state.mode = InputMode::ConfirmQuit;
            None
        }

        _ => None,
    }
}

/// Arm (or disarm) the highlighted champion. Rows already on the board are
/// skipped.
fn activate_highlighted(view_state: &ViewState) -> Option<UserCommand> {
    let row = view_state.highlighted()?;
    if !row.selectable {
        return None;
    }
    Some(UserCommand::Activate(row.champion.id.clone()))
}

// ---------------------------------------------------------------------------
// Search mode
// ---------------------------------------------------------------------------

fn handle_search(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char(c) => {
            view_state.query.push(c);
            view_state.roster_cursor = 0;
            Some(UserCommand::SetQuery(view_state.query.clone()))
        }
        KeyCode::Backspace => {
            view_state.query.pop()?;
            view_state.roster_cursor = 0;
            Some(UserCommand::SetQuery(view_state.query.clone()))
        }
        KeyCode::Up => {
            move_roster_cursor(view_state, -1);
            None
        }
        KeyCode::Down => {
            move_roster_cursor(view_state, 1);
            None
        }
        // Enter keeps the query and returns to normal mode on the list.
        KeyCode::Enter => {
            view_state.mode = InputMode::Normal;
            view_state.focus = Focus::Roster;
            None
        }
        KeyCode::Esc => {
            view_state.mode = InputMode::Normal;
            view_state.query.clear();
            view_state.roster_cursor = 0;
            Some(UserCommand::SetQuery(String::new()))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Rename mode
// ---------------------------------------------------------------------------

fn handle_rename(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let InputMode::Rename { side, buffer } = &mut view_state.mode else {
        return None;
    };
    match key_event.code {
        KeyCode::Char(c) => {
            buffer.push(c);
            None
        }
        KeyCode::Backspace => {
            buffer.pop();
            None
        }
        KeyCode::Enter => {
            let cmd = UserCommand::RenameTeam {
                side: *side,
                name: std::mem::take(buffer),
            };
            view_state.mode = InputMode::Normal;
            Some(cmd)
        }
        KeyCode::Esc => {
            view_state.mode = InputMode::Normal;
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Quit confirmation
// ---------------------------------------------------------------------------

fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('q') => Some(UserCommand::Quit),
        KeyCode::Char('n') | KeyCode::Esc => {
            view_state.mode = InputMode::Normal;
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Cursor movement
// ---------------------------------------------------------------------------

fn move_vertical(view_state: &mut ViewState, delta: isize) {
    match view_state.focus {
        Focus::Roster => move_roster_cursor(view_state, delta),
        Focus::Board => {
            view_state.slot_cursor = step_slot(view_state.slot_cursor, delta);
        }
    }
}

fn move_roster_cursor(view_state: &mut ViewState, delta: isize) {
    if view_state.candidates.is_empty() {
        view_state.roster_cursor = 0;
        return;
    }
    let last = view_state.candidates.len() - 1;
    view_state.roster_cursor = view_state
        .roster_cursor
        .saturating_add_signed(delta)
        .min(last);
}

/// Left/right jump the board cursor to the same slot on the given side.
fn move_side(view_state: &mut ViewState, side: Side) {
    if view_state.focus == Focus::Board {
        view_state.slot_cursor.side = side;
    }
}

/// Step through one side's slots: bans top to bottom, then picks. Stops at
/// either end.
pub fn step_slot(slot: SlotRef, delta: isize) -> SlotRef {
    let mut current = slot;
    for _ in 0..delta.unsigned_abs() {
        let next = if delta > 0 {
            match (current.kind, current.index.next()) {
                (_, Some(index)) => Some(SlotRef::new(current.side, current.kind, index)),
                (SlotKind::Ban, None) => {
                    Some(SlotRef::new(current.side, SlotKind::Pick, SlotIndex::FIRST))
                }
                (SlotKind::Pick, None) => None,
            }
        } else {
            match (current.kind, current.index.prev()) {
                (_, Some(index)) => Some(SlotRef::new(current.side, current.kind, index)),
                (SlotKind::Pick, None) => {
                    Some(SlotRef::new(current.side, SlotKind::Ban, SlotIndex::LAST))
                }
                (SlotKind::Ban, None) => None,
            }
        };
        match next {
            Some(slot) => current = slot,
            None => break,
        }
    }
    current
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

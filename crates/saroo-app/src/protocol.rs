// Messages between the app event loop, the roster loader, and the TUI.

use saroo_core::champion::Champion;
use saroo_core::draft::{Board, Side, SlotRef};
use saroo_core::roster::Roster;
use saroo_core::search::{Candidate, MatchTier};

use crate::teams::TeamNames;

// ---------------------------------------------------------------------------
// TUI -> app
// ---------------------------------------------------------------------------

/// Commands sent from the TUI to the app event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Replace the search query.
    SetQuery(String),
    /// Toggle the armed selection on the champion with this id.
    Activate(String),
    /// Click a board slot: place the armed champion or clear the occupant.
    ClickSlot(SlotRef),
    /// Empty the board and disarm.
    Reset,
    RenameTeam { side: Side, name: String },
    Quit,
}

// ---------------------------------------------------------------------------
// Roster loader -> app
// ---------------------------------------------------------------------------

/// Result of the one-shot roster load.
#[derive(Debug, Clone)]
pub enum RosterEvent {
    Loaded(Roster),
    Failed(String),
}

// ---------------------------------------------------------------------------
// App -> TUI
// ---------------------------------------------------------------------------

/// Where the roster load stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// An owned copy of one ranked candidate, for sending across the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    pub champion: Champion,
    pub tier: MatchTier,
    pub selectable: bool,
    pub is_active: bool,
}

impl From<Candidate<'_>> for CandidateRow {
    fn from(candidate: Candidate<'_>) -> Self {
        CandidateRow {
            champion: candidate.champion.clone(),
            tier: candidate.tier,
            selectable: candidate.selectable,
            is_active: candidate.is_active,
        }
    }
}

/// Everything the TUI needs to draw one frame.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    pub phase: LoadPhase,
    /// Where the roster comes from, for the status bar.
    pub source: String,
    pub roster_size: usize,
    pub query: String,
    pub candidates: Vec<CandidateRow>,
    pub board: Board,
    pub active: Option<Champion>,
    pub teams: TeamNames,
}

/// Updates pushed from the app event loop to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    Snapshot(Box<AppSnapshot>),
    /// One-line message for the status bar (e.g. a rejected placement).
    Notice(String),
}

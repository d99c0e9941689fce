// Application state and orchestration logic.
//
// The event loop owns the `AppState`, applies the roster load result and
// user commands from the TUI, and pushes a fresh snapshot back after each
// change.

use saroo_core::draft::{ActiveSelection, DraftState, SlotOutcome};
use saroo_core::roster::Roster;
use saroo_core::search::{Candidate, SearchIndex};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::protocol::{AppSnapshot, CandidateRow, LoadPhase, RosterEvent, UiUpdate, UserCommand};
use crate::teams::TeamNames;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    /// Where the roster comes from, for display.
    pub source: String,
    phase: LoadPhase,
    index: SearchIndex,
    query: String,
    active: ActiveSelection,
    draft: DraftState,
    teams: TeamNames,
}

impl AppState {
    pub fn new(config: Config, source: String) -> Self {
        let teams = TeamNames::new(config.teams.clone());
        AppState {
            config,
            source,
            phase: LoadPhase::Loading,
            index: SearchIndex::default(),
            query: String::new(),
            active: ActiveSelection::Empty,
            draft: DraftState::new(),
            teams,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn roster(&self) -> &Roster {
        self.index.roster()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active(&self) -> &ActiveSelection {
        &self.active
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn teams(&self) -> &TeamNames {
        &self.teams
    }

    /// Ranked champion list for the current query, annotated with the
    /// used-set and the armed selection.
    pub fn candidates(&self) -> Vec<Candidate<'_>> {
        self.index
            .rank(&self.query, self.draft.used_ids(), self.active.id())
    }

    /// Apply the roster loader's result.
    pub fn apply_roster_event(&mut self, event: RosterEvent) {
        match event {
            RosterEvent::Loaded(roster) => {
                info!("Roster ready: {} champions", roster.len());
                self.index = SearchIndex::new(roster);
                self.phase = LoadPhase::Ready;
            }
            RosterEvent::Failed(message) => {
                warn!("Roster unavailable: {}", message);
                self.phase = LoadPhase::Failed(message);
            }
        }
    }

    /// Apply one user command. Returns a notice for the status bar when the
    /// command was refused or deserves a message.
    pub fn handle_command(&mut self, cmd: UserCommand) -> Option<String> {
        match cmd {
            UserCommand::SetQuery(query) => {
                debug!("Query: {:?}", query);
                self.query = query;
                None
            }
            UserCommand::Activate(id) => self.activate(&id),
            UserCommand::ClickSlot(slot) => {
                let outcome = self.draft.assign_or_clear(&mut self.active, slot);
                match outcome {
                    SlotOutcome::Placed {
                        slot,
                        champion_id,
                        evicted,
                    } => {
                        match evicted {
                            Some(previous) => {
                                info!("{} placed in {} (replacing {})", champion_id, slot, previous)
                            }
                            None => info!("{} placed in {}", champion_id, slot),
                        }
                        None
                    }
                    SlotOutcome::Cleared { slot, champion_id } => {
                        info!("{} removed from {}", champion_id, slot);
                        None
                    }
                    SlotOutcome::NothingToClear { .. } => None,
                    SlotOutcome::AlreadyUsed { champion_id, .. } => {
                        Some(format!("{} is already on the board", self.display_name(&champion_id)))
                    }
                }
            }
            UserCommand::Reset => {
                self.draft.reset(&mut self.active);
                info!("Draft reset");
                Some("Draft reset".to_string())
            }
            UserCommand::RenameTeam { side, name } => {
                let name = self.teams.rename(side, &name);
                info!("{} side renamed to {:?}", side, name);
                None
            }
            UserCommand::Quit => {
                // Handled in the main loop
                None
            }
        }
    }

    /// Toggle the armed selection. Ids that are unknown or already placed
    /// are refused so a used champion can never be armed.
    fn activate(&mut self, id: &str) -> Option<String> {
        let Some(champion) = self.index.roster().get(id) else {
            debug!("Ignoring activation of unknown id {}", id);
            return None;
        };
        if self.draft.is_used(id) {
            debug!("Ignoring activation of used champion {}", id);
            return Some(format!("{} is already on the board", champion.name_ko));
        }
        self.active.toggle(champion);
        debug!("Active selection: {:?}", self.active.id());
        None
    }

    fn display_name(&self, id: &str) -> String {
        self.index
            .roster()
            .get(id)
            .map(|c| c.name_ko.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Build the full snapshot the TUI renders from.
    pub fn build_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            phase: self.phase.clone(),
            source: self.source.clone(),
            roster_size: self.index.roster().len(),
            query: self.query.clone(),
            candidates: self.candidates().into_iter().map(CandidateRow::from).collect(),
            board: self.draft.board().clone(),
            active: self.active.champion().cloned(),
            teams: self.teams.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the application event loop until the user quits or the command
/// channel closes.
pub async fn run(
    mut roster_rx: mpsc::Receiver<RosterEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");
    send_snapshot(&state, &ui_tx).await;

    // The loader sends once and exits; stop polling after its channel closes.
    let mut roster_open = true;

    loop {
        tokio::select! {
            // --- Roster load result ---
            event = roster_rx.recv(), if roster_open => {
                match event {
                    Some(event) => {
                        state.apply_roster_event(event);
                        send_snapshot(&state, &ui_tx).await;
                    }
                    None => {
                        debug!("Roster channel closed");
                        roster_open = false;
                    }
                }
            }

            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        let notice = state.handle_command(cmd);
                        send_snapshot(&state, &ui_tx).await;
                        if let Some(message) = notice {
                            let _ = ui_tx.send(UiUpdate::Notice(message)).await;
                        }
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use saroo_core::champion::Champion;
    use saroo_core::draft::{Side, SlotKind, SlotRef};
    use saroo_core::search::MatchTier;

    // -----------------------------------------------------------------------
    // Test helpers
    // -----------------------------------------------------------------------

    fn champ(id: &str, name: &str, name_ko: &str) -> Champion {
        Champion::new(id, "0", name, name_ko, "")
    }

    fn test_roster() -> Roster {
        Roster::from_champions(vec![
            champ("Aatrox", "Aatrox", "아트록스"),
            champ("Ahri", "Ahri", "아리"),
            champ("Garen", "Garen", "가렌"),
            champ("Graves", "Graves", "그레이브즈"),
            champ("Lucian", "Lucian", "루시안"),
            champ("Leona", "Leona", "레오나"),
        ])
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new(Config::default(), "test".into());
        state.apply_roster_event(RosterEvent::Loaded(test_roster()));
        state
    }

    fn slot(side: Side, kind: SlotKind, index: usize) -> SlotRef {
        SlotRef::at(side, kind, index).unwrap()
    }

    fn candidate_ids(state: &AppState) -> Vec<String> {
        state
            .candidates()
            .iter()
            .map(|c| c.champion.id.clone())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Tests: roster phase
    // -----------------------------------------------------------------------

    #[test]
    fn starts_loading_with_no_candidates() {
        let state = AppState::new(Config::default(), "test".into());
        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert!(state.candidates().is_empty());
        assert_eq!(state.teams().get(Side::Blue), "Team X");
    }

    #[test]
    fn loaded_roster_is_listed_in_collation_order() {
        let state = ready_state();
        assert_eq!(state.phase(), &LoadPhase::Ready);
        assert_eq!(
            candidate_ids(&state),
            vec!["Garen", "Graves", "Leona", "Lucian", "Ahri", "Aatrox"]
        );
    }

    #[test]
    fn failed_roster_keeps_message() {
        let mut state = AppState::new(Config::default(), "test".into());
        state.apply_roster_event(RosterEvent::Failed("connection refused".into()));
        assert_eq!(state.phase(), &LoadPhase::Failed("connection refused".into()));
        assert!(state.build_snapshot().candidates.is_empty());
    }

    // -----------------------------------------------------------------------
    // Tests: commands
    // -----------------------------------------------------------------------

    #[test]
    fn set_query_filters_candidates() {
        let mut state = ready_state();
        state.handle_command(UserCommand::SetQuery("ㄹ".into()));
        let candidates = state.candidates();
        assert_eq!(candidates[0].champion.id, "Leona");
        assert_eq!(candidates[0].tier, MatchTier::InitialsPrefix);
        assert_eq!(state.query(), "ㄹ");
    }

    #[test]
    fn activate_toggles_selection() {
        let mut state = ready_state();
        state.handle_command(UserCommand::Activate("Ahri".into()));
        assert_eq!(state.active().id(), Some("Ahri"));
        let ahri = state
            .candidates()
            .into_iter()
            .find(|c| c.champion.id == "Ahri")
            .unwrap();
        assert!(ahri.is_active);

        state.handle_command(UserCommand::Activate("Ahri".into()));
        assert!(!state.active().is_armed());
    }

    #[test]
    fn activate_unknown_id_is_ignored() {
        let mut state = ready_state();
        state.handle_command(UserCommand::Activate("Garen".into()));
        let notice = state.handle_command(UserCommand::Activate("Teemo".into()));
        assert!(notice.is_none());
        assert_eq!(state.active().id(), Some("Garen"));
    }

    #[test]
    fn activate_used_champion_is_refused() {
        let mut state = ready_state();
        state.handle_command(UserCommand::Activate("Garen".into()));
        state.handle_command(UserCommand::ClickSlot(slot(Side::Blue, SlotKind::Ban, 0)));

        let notice = state.handle_command(UserCommand::Activate("Garen".into()));

        assert_eq!(notice.as_deref(), Some("가렌 is already on the board"));
        assert!(!state.active().is_armed());
        let garen = state
            .candidates()
            .into_iter()
            .find(|c| c.champion.id == "Garen")
            .unwrap();
        assert!(!garen.selectable);
    }

    #[test]
    fn click_slot_places_and_clears() {
        let mut state = ready_state();
        let target = slot(Side::Red, SlotKind::Pick, 2);
        state.handle_command(UserCommand::Activate("Lucian".into()));
        assert!(state.handle_command(UserCommand::ClickSlot(target)).is_none());
        assert_eq!(state.draft().slot(target).unwrap().id, "Lucian");
        assert!(!state.active().is_armed());

        state.handle_command(UserCommand::ClickSlot(target));
        assert!(state.draft().slot(target).is_none());
        assert!(!state.draft().is_used("Lucian"));
    }

    #[test]
    fn reset_clears_board_and_selection_but_keeps_names() {
        let mut state = ready_state();
        state.handle_command(UserCommand::RenameTeam {
            side: Side::Red,
            name: "Gen.G".into(),
        });
        state.handle_command(UserCommand::Activate("Ahri".into()));
        state.handle_command(UserCommand::ClickSlot(slot(Side::Blue, SlotKind::Pick, 0)));
        state.handle_command(UserCommand::Activate("Zed".into()));
        state.handle_command(UserCommand::Activate("Leona".into()));

        let notice = state.handle_command(UserCommand::Reset);

        assert_eq!(notice.as_deref(), Some("Draft reset"));
        assert!(state.draft().board().is_empty());
        assert!(!state.active().is_armed());
        assert_eq!(state.teams().get(Side::Red), "Gen.G");
    }

    #[test]
    fn rename_team_blank_restores_default() {
        let mut state = ready_state();
        state.handle_command(UserCommand::RenameTeam {
            side: Side::Blue,
            name: "  T1 ".into(),
        });
        assert_eq!(state.teams().get(Side::Blue), "T1");
        state.handle_command(UserCommand::RenameTeam {
            side: Side::Blue,
            name: " ".into(),
        });
        assert_eq!(state.teams().get(Side::Blue), "Team X");
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = ready_state();
        state.handle_command(UserCommand::Activate("Graves".into()));
        state.handle_command(UserCommand::ClickSlot(slot(Side::Blue, SlotKind::Ban, 4)));
        state.handle_command(UserCommand::Activate("Aatrox".into()));
        state.handle_command(UserCommand::SetQuery("a".into()));

        let snapshot = state.build_snapshot();
        assert_eq!(snapshot.phase, LoadPhase::Ready);
        assert_eq!(snapshot.roster_size, 6);
        assert_eq!(snapshot.query, "a");
        assert_eq!(snapshot.active.map(|c| c.id), Some("Aatrox".to_string()));
        assert_eq!(
            snapshot.board.find("Graves"),
            Some(slot(Side::Blue, SlotKind::Ban, 4))
        );
        let graves = snapshot
            .candidates
            .iter()
            .find(|c| c.champion.id == "Graves")
            .unwrap();
        assert!(!graves.selectable);
        assert!(snapshot.candidates.iter().any(|c| c.is_active));
    }

    // -----------------------------------------------------------------------
    // Tests: Async event loop
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn event_loop_handles_quit_command() {
        let state = AppState::new(Config::default(), "test".into());
        let (_roster_tx, roster_rx) = mpsc::channel(1);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (ui_tx, mut ui_rx) = mpsc::channel(64);

        let handle = tokio::spawn(run(roster_rx, cmd_rx, ui_tx, state));

        // Initial snapshot arrives before any input.
        match ui_rx.recv().await {
            Some(UiUpdate::Snapshot(snapshot)) => assert_eq!(snapshot.phase, LoadPhase::Loading),
            other => panic!("expected Snapshot, got {other:?}"),
        }

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        let result = handle.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn event_loop_exits_when_command_channel_closes() {
        let state = AppState::new(Config::default(), "test".into());
        let (_roster_tx, roster_rx) = mpsc::channel(1);
        let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>(16);
        let (ui_tx, _ui_rx) = mpsc::channel(64);

        let handle = tokio::spawn(run(roster_rx, cmd_rx, ui_tx, state));
        drop(cmd_tx);

        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn event_loop_applies_roster_then_commands() {
        let state = AppState::new(Config::default(), "test".into());
        let (roster_tx, roster_rx) = mpsc::channel(1);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (ui_tx, mut ui_rx) = mpsc::channel(64);

        let handle = tokio::spawn(run(roster_rx, cmd_rx, ui_tx, state));
        let _initial = ui_rx.recv().await;

        roster_tx.send(RosterEvent::Loaded(test_roster())).await.unwrap();
        drop(roster_tx);
        match ui_rx.recv().await {
            Some(UiUpdate::Snapshot(snapshot)) => {
                assert_eq!(snapshot.phase, LoadPhase::Ready);
                assert_eq!(snapshot.candidates.len(), 6);
            }
            other => panic!("expected Snapshot, got {other:?}"),
        }

        cmd_tx.send(UserCommand::Reset).await.unwrap();
        assert!(matches!(ui_rx.recv().await, Some(UiUpdate::Snapshot(_))));
        match ui_rx.recv().await {
            Some(UiUpdate::Notice(message)) => assert_eq!(message, "Draft reset"),
            other => panic!("expected Notice, got {other:?}"),
        }

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        assert!(handle.await.unwrap().is_ok());
    }
}

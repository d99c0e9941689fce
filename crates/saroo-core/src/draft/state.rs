// Draft state: board contents plus the index of champions already placed.

use std::collections::HashSet;

use tracing::debug;

use super::board::{Board, SlotRef};
use super::selection::ActiveSelection;
use crate::champion::Champion;

/// What a slot interaction did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The armed champion was placed; `evicted` is the previous occupant when
    /// it was a different champion.
    Placed {
        slot: SlotRef,
        champion_id: String,
        evicted: Option<String>,
    },
    /// Nothing was armed and the slot's occupant was removed.
    Cleared { slot: SlotRef, champion_id: String },
    /// Nothing was armed and the slot was already empty.
    NothingToClear { slot: SlotRef },
    /// The armed champion already sits in a different slot.
    AlreadyUsed { slot: SlotRef, champion_id: String },
}

impl SlotOutcome {
    /// True when neither the board nor the selection changed.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            SlotOutcome::NothingToClear { .. } | SlotOutcome::AlreadyUsed { .. }
        )
    }
}

/// The canonical draft: 20 slots and the set of ids occupying them.
///
/// `used` is kept in step with `board` by every mutating method, so an id is
/// in `used` exactly when it occupies one slot.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    board: Board,
    used: HashSet<String>,
}

impl DraftState {
    pub fn new() -> Self {
        DraftState::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ids of champions currently on the board.
    pub fn used_ids(&self) -> &HashSet<String> {
        &self.used
    }

    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn slot(&self, slot: SlotRef) -> Option<&Champion> {
        self.board.get(slot)
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.used.len()
    }

    /// Handle a click on `slot`.
    ///
    /// With nothing armed, an occupied slot is cleared and its champion
    /// released. With a champion armed, it is placed into the slot (replacing
    /// any occupant) and the selection is cleared, unless it already sits in a
    /// different slot, in which case nothing changes.
    pub fn assign_or_clear(&mut self, active: &mut ActiveSelection, slot: SlotRef) -> SlotOutcome {
        let outcome = match &*active {
            ActiveSelection::Empty => self.clear_slot(slot),
            ActiveSelection::Armed(champion) => self.place(slot, champion),
        };

        if let SlotOutcome::Placed { .. } = outcome {
            active.clear();
        }

        debug_assert!(self.is_consistent(), "board and used-set diverged at {slot}");
        debug!(?outcome, "slot interaction");
        outcome
    }

    /// Empty every slot and disarm the selection.
    pub fn reset(&mut self, active: &mut ActiveSelection) {
        self.board = Board::default();
        self.used.clear();
        active.clear();
    }

    /// Whether `used` matches the board exactly and no id sits in two slots.
    pub fn is_consistent(&self) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, champion) in self.board.occupied() {
            if !seen.insert(champion.id.as_str()) {
                return false;
            }
        }
        seen.len() == self.used.len() && seen.iter().all(|id| self.used.contains(*id))
    }

    fn clear_slot(&mut self, slot: SlotRef) -> SlotOutcome {
        match self.board.slot_mut(slot).take() {
            Some(previous) => {
                self.used.remove(&previous.id);
                SlotOutcome::Cleared {
                    slot,
                    champion_id: previous.id,
                }
            }
            None => SlotOutcome::NothingToClear { slot },
        }
    }

    fn place(&mut self, slot: SlotRef, champion: &Champion) -> SlotOutcome {
        let current = self.board.slot_mut(slot);
        let already_here = current.as_ref().is_some_and(|c| c.id == champion.id);

        if !already_here && self.used.contains(&champion.id) {
            return SlotOutcome::AlreadyUsed {
                slot,
                champion_id: champion.id.clone(),
            };
        }

        let evicted = current
            .replace(champion.clone())
            .filter(|previous| previous.id != champion.id)
            .map(|previous| previous.id);

        if let Some(id) = &evicted {
            self.used.remove(id);
        }
        self.used.insert(champion.id.clone());

        SlotOutcome::Placed {
            slot,
            champion_id: champion.id.clone(),
            evicted,
        }
    }
}

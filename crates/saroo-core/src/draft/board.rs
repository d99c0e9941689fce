// Board layout: sides, slot kinds, and the 20 fixed slot positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::champion::Champion;

/// Ban slots and pick slots per side.
pub const SLOTS_PER_ROW: usize = 5;

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Blue, Side::Red];

    pub fn display_str(&self) -> &'static str {
        match self {
            Side::Blue => "blue",
            Side::Red => "red",
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// Whether a slot holds a ban or a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Ban,
    Pick,
}

impl SlotKind {
    pub const ALL: [SlotKind; 2] = [SlotKind::Ban, SlotKind::Pick];

    pub fn display_str(&self) -> &'static str {
        match self {
            SlotKind::Ban => "ban",
            SlotKind::Pick => "pick",
        }
    }

    pub fn other(self) -> SlotKind {
        match self {
            SlotKind::Ban => SlotKind::Pick,
            SlotKind::Pick => SlotKind::Ban,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// Position within a row, always in `0..SLOTS_PER_ROW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const FIRST: SlotIndex = SlotIndex(0);
    pub const LAST: SlotIndex = SlotIndex(SLOTS_PER_ROW as u8 - 1);

    /// `None` when `index` is out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOTS_PER_ROW).then_some(SlotIndex(index as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOTS_PER_ROW as u8).map(SlotIndex)
    }

    pub fn next(self) -> Option<Self> {
        SlotIndex::new(self.get() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.get().checked_sub(1).map(|i| SlotIndex(i as u8))
    }
}

/// Address of one of the 20 board slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub side: Side,
    pub kind: SlotKind,
    pub index: SlotIndex,
}

impl SlotRef {
    pub fn new(side: Side, kind: SlotKind, index: SlotIndex) -> Self {
        SlotRef { side, kind, index }
    }

    /// Convenience constructor; `None` for an out-of-range index.
    pub fn at(side: Side, kind: SlotKind, index: usize) -> Option<Self> {
        SlotIndex::new(index).map(|index| SlotRef { side, kind, index })
    }

    /// Every slot on the board, blue before red, bans before picks.
    pub fn all() -> impl Iterator<Item = SlotRef> {
        Side::ALL.into_iter().flat_map(|side| {
            SlotKind::ALL.into_iter().flat_map(move |kind| {
                SlotIndex::all().map(move |index| SlotRef { side, kind, index })
            })
        })
    }

    /// Short label shown next to the slot.
    ///
    /// Bans count from the centre of the board outward: blue's rightmost slot
    /// (index 4) is B1, red's leftmost (index 0) is B1. Picks are P1..P5 top
    /// to bottom on both sides.
    pub fn label(&self) -> String {
        let i = self.index.get();
        match (self.kind, self.side) {
            (SlotKind::Ban, Side::Blue) => format!("B{}", SLOTS_PER_ROW - i),
            (SlotKind::Ban, Side::Red) => format!("B{}", i + 1),
            (SlotKind::Pick, _) => format!("P{}", i + 1),
        }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.side, self.kind, self.index.get())
    }
}

/// One side's bans and picks.
#[derive(Debug, Clone, Default)]
pub struct SideSlots {
    bans: [Option<Champion>; SLOTS_PER_ROW],
    picks: [Option<Champion>; SLOTS_PER_ROW],
}

impl SideSlots {
    pub fn bans(&self) -> &[Option<Champion>; SLOTS_PER_ROW] {
        &self.bans
    }

    pub fn picks(&self) -> &[Option<Champion>; SLOTS_PER_ROW] {
        &self.picks
    }

    pub fn row(&self, kind: SlotKind) -> &[Option<Champion>; SLOTS_PER_ROW] {
        match kind {
            SlotKind::Ban => &self.bans,
            SlotKind::Pick => &self.picks,
        }
    }

    fn row_mut(&mut self, kind: SlotKind) -> &mut [Option<Champion>; SLOTS_PER_ROW] {
        match kind {
            SlotKind::Ban => &mut self.bans,
            SlotKind::Pick => &mut self.picks,
        }
    }
}

/// Slot contents for both sides. Mutation is crate-private so the used-id
/// index in `DraftState` cannot be bypassed.
#[derive(Debug, Clone, Default)]
pub struct Board {
    blue: SideSlots,
    red: SideSlots,
}

impl Board {
    pub fn side(&self, side: Side) -> &SideSlots {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn get(&self, slot: SlotRef) -> Option<&Champion> {
        self.side(slot.side).row(slot.kind)[slot.index.get()].as_ref()
    }

    pub(crate) fn slot_mut(&mut self, slot: SlotRef) -> &mut Option<Champion> {
        let side = match slot.side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        };
        &mut side.row_mut(slot.kind)[slot.index.get()]
    }

    /// Occupied slots with their champions, in `SlotRef::all` order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotRef, &Champion)> + '_ {
        SlotRef::all().filter_map(move |slot| self.get(slot).map(|c| (slot, c)))
    }

    /// Where a champion currently sits, if anywhere.
    pub fn find(&self, id: &str) -> Option<SlotRef> {
        self.occupied()
            .find(|(_, c)| c.id == id)
            .map(|(slot, _)| slot)
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_range() {
        assert!(SlotIndex::new(0).is_some());
        assert!(SlotIndex::new(4).is_some());
        assert!(SlotIndex::new(5).is_none());
        assert_eq!(SlotIndex::all().count(), SLOTS_PER_ROW);
    }

    #[test]
    fn slot_index_next_prev_stop_at_edges() {
        let first = SlotIndex::new(0).unwrap();
        let last = SlotIndex::new(4).unwrap();
        assert_eq!(first.prev(), None);
        assert_eq!(last.next(), None);
        assert_eq!(first.next().map(SlotIndex::get), Some(1));
        assert_eq!(last.prev().map(SlotIndex::get), Some(3));
    }

    #[test]
    fn twenty_distinct_slots() {
        let all: Vec<SlotRef> = SlotRef::all().collect();
        assert_eq!(all.len(), 20);
        let unique: std::collections::HashSet<SlotRef> = all.iter().copied().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn ban_labels_count_from_centre() {
        let blue: Vec<String> = SlotIndex::all()
            .map(|i| SlotRef::new(Side::Blue, SlotKind::Ban, i).label())
            .collect();
        let red: Vec<String> = SlotIndex::all()
            .map(|i| SlotRef::new(Side::Red, SlotKind::Ban, i).label())
            .collect();
        assert_eq!(blue, vec!["B5", "B4", "B3", "B2", "B1"]);
        assert_eq!(red, vec!["B1", "B2", "B3", "B4", "B5"]);
    }

    #[test]
    fn pick_labels() {
        let slot = SlotRef::at(Side::Blue, SlotKind::Pick, 2).unwrap();
        assert_eq!(slot.label(), "P3");
    }

    #[test]
    fn display_is_path_like() {
        let slot = SlotRef::at(Side::Red, SlotKind::Ban, 2).unwrap();
        assert_eq!(slot.to_string(), "red/ban/2");
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::default();
        assert!(board.is_empty());
        for slot in SlotRef::all() {
            assert!(board.get(slot).is_none());
        }
    }

    #[test]
    fn slot_mut_addresses_one_slot() {
        let mut board = Board::default();
        let slot = SlotRef::at(Side::Red, SlotKind::Pick, 3).unwrap();
        *board.slot_mut(slot) = Some(Champion::new("Ahri", "103", "Ahri", "아리", ""));
        assert_eq!(board.occupied().count(), 1);
        assert_eq!(board.find("Ahri"), Some(slot));
        assert_eq!(board.side(Side::Red).picks()[3].as_ref().unwrap().id, "Ahri");
        assert!(board.side(Side::Blue).picks()[3].is_none());
    }

    #[test]
    fn side_and_kind_helpers() {
        assert_eq!(Side::Blue.opposite(), Side::Red);
        assert_eq!(SlotKind::Ban.other(), SlotKind::Pick);
        assert_eq!(serde_json::to_string(&Side::Red).unwrap(), "\"red\"");
    }
}

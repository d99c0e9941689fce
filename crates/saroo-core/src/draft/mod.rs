// Draft board: slot addressing, the armed selection, and the assignment
// state machine.

pub mod board;
pub mod selection;
pub mod state;

pub use board::{Board, Side, SideSlots, SlotIndex, SlotKind, SlotRef, SLOTS_PER_ROW};
pub use selection::ActiveSelection;
pub use state::{DraftState, SlotOutcome};

// Draft board core: champion roster, search ranking, and slot assignment.
//
// Nothing in this crate performs I/O. Roster bytes come in from the caller,
// and every operation runs to completion synchronously.

pub mod champion;
pub mod collate;
pub mod ddragon;
pub mod draft;
pub mod roster;
pub mod search;

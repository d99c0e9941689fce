// The armed selection: the champion the next slot interaction will place.

use crate::champion::Champion;

/// Either nothing is armed, or exactly one champion is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveSelection {
    #[default]
    Empty,
    Armed(Champion),
}

impl ActiveSelection {
    /// Toggle `champion`: arming it again disarms, arming a different one
    /// replaces the previous choice.
    ///
    /// Callers must not arm a champion that already occupies a slot; this is
    /// not re-checked here.
    pub fn activate(self, champion: Champion) -> ActiveSelection {
        match self {
            ActiveSelection::Armed(current) if current.id == champion.id => ActiveSelection::Empty,
            _ => ActiveSelection::Armed(champion),
        }
    }

    /// In-place form of [`ActiveSelection::activate`].
    pub fn toggle(&mut self, champion: &Champion) {
        *self = std::mem::take(self).activate(champion.clone());
    }

    pub fn clear(&mut self) {
        *self = ActiveSelection::Empty;
    }

    pub fn champion(&self) -> Option<&Champion> {
        match self {
            ActiveSelection::Empty => None,
            ActiveSelection::Armed(champion) => Some(champion),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.champion().map(|c| c.id.as_str())
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, ActiveSelection::Armed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(id: &str) -> Champion {
        Champion::new(id, "0", id, id, "")
    }

    #[test]
    fn activate_from_empty_arms() {
        let active = ActiveSelection::Empty.activate(champ("Aatrox"));
        assert_eq!(active.id(), Some("Aatrox"));
        assert!(active.is_armed());
    }

    #[test]
    fn activate_same_disarms() {
        let active = ActiveSelection::Armed(champ("Aatrox")).activate(champ("Aatrox"));
        assert_eq!(active, ActiveSelection::Empty);
    }

    #[test]
    fn activate_other_replaces() {
        let active = ActiveSelection::Armed(champ("Aatrox")).activate(champ("Graves"));
        assert_eq!(active.id(), Some("Graves"));
    }

    #[test]
    fn toggle_in_place() {
        let mut active = ActiveSelection::default();
        active.toggle(&champ("Ahri"));
        assert_eq!(active.id(), Some("Ahri"));
        active.toggle(&champ("Ahri"));
        assert!(!active.is_armed());
        assert_eq!(active.id(), None);
    }

    #[test]
    fn clear_disarms() {
        let mut active = ActiveSelection::Armed(champ("Zed"));
        active.clear();
        assert_eq!(active, ActiveSelection::Empty);
    }
}

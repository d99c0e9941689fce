// Ordered, deduplicated champion roster.

use std::collections::HashSet;

use tracing::warn;

use crate::champion::Champion;
use crate::collate;

/// The champions available for a session, unique by id and sorted by
/// localized name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    champions: Vec<Champion>,
}

impl Roster {
    /// Build a roster from raw champions.
    ///
    /// Duplicate ids keep their first occurrence. The result is ordered by
    /// `collate::compare` on `name_ko`; the sort is stable, so champions with
    /// identical display names keep their input order.
    pub fn from_champions(champions: Vec<Champion>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(champions.len());
        let mut unique = Vec::with_capacity(champions.len());

        for champ in champions {
            if seen.insert(champ.id.clone()) {
                unique.push(champ);
            } else {
                warn!("Dropping duplicate champion id '{}'", champ.id);
            }
        }

        unique.sort_by(|a, b| collate::compare(&a.name_ko, &b.name_ko));

        Roster { champions: unique }
    }

    /// Look up a champion by id.
    pub fn get(&self, id: &str) -> Option<&Champion> {
        self.champions.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Champion> {
        self.champions.iter()
    }

    pub fn as_slice(&self) -> &[Champion] {
        &self.champions
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Champion;
    type IntoIter = std::slice::Iter<'a, Champion>;

    fn into_iter(self) -> Self::IntoIter {
        self.champions.iter()
    }
}

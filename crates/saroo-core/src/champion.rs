// Champion entity shown on the draft board.

use serde::{Deserialize, Serialize};

/// A selectable champion.
///
/// Identity is `id` alone (the English Data Dragon identifier, e.g.
/// "Aatrox"); the remaining fields are descriptive and never change during a
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    /// Stable identifier, unique within a roster.
    pub id: String,
    /// Numeric champion key, kept as the string Data Dragon sends.
    pub key: String,
    /// Canonical (romanized) name.
    pub name: String,
    /// Localized display name.
    pub name_ko: String,
    /// Portrait image URL.
    pub image: String,
}

impl Champion {
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        name: impl Into<String>,
        name_ko: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Champion {
            id: id.into(),
            key: key.into(),
            name: name.into(),
            name_ko: name_ko.into(),
            image: image.into(),
        }
    }
}

impl PartialEq for Champion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Champion {}

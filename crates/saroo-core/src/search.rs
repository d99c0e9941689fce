// Champion search: Hangul-aware normalization and tiered ranking.
//
// A query is matched against four fields of every champion: the romanized
// name, the localized name, the id, and the leading consonants (choseong) of
// the localized name, so "ㄹㅅㅇ" finds 루시안. Doubled consonants and
// compound finals are split into their base jamo on both sides before
// comparing, which makes the match insensitive to how a cluster was typed.

use std::collections::HashSet;

use crate::champion::Champion;
use crate::collate;
use crate::roster::Roster;

// ---------------------------------------------------------------------------
// Hangul constants
// ---------------------------------------------------------------------------

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;

/// Syllables sharing one leading consonant: 21 vowels * 28 finals.
const CHOSEONG_SPAN: u32 = 588;

const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Split a doubled consonant or compound final into its two parts.
fn decompose_jamo(ch: char) -> Option<[char; 2]> {
    let parts = match ch {
        // doubled consonants
        'ㄲ' => ['ㄱ', 'ㄱ'],
        'ㄸ' => ['ㄷ', 'ㄷ'],
        'ㅃ' => ['ㅂ', 'ㅂ'],
        'ㅆ' => ['ㅅ', 'ㅅ'],
        'ㅉ' => ['ㅈ', 'ㅈ'],
        // compound finals
        'ㄳ' => ['ㄱ', 'ㅅ'],
        'ㄵ' => ['ㄴ', 'ㅈ'],
        'ㄶ' => ['ㄴ', 'ㅎ'],
        'ㄺ' => ['ㄹ', 'ㄱ'],
        'ㄻ' => ['ㄹ', 'ㅁ'],
        'ㄼ' => ['ㄹ', 'ㅂ'],
        'ㄽ' => ['ㄹ', 'ㅅ'],
        'ㄾ' => ['ㄹ', 'ㅌ'],
        'ㄿ' => ['ㄹ', 'ㅍ'],
        'ㅀ' => ['ㄹ', 'ㅎ'],
        'ㅄ' => ['ㅂ', 'ㅅ'],
        _ => return None,
    };
    Some(parts)
}

/// Byte order mark, often carried along by pasted text.
const BOM: char = '\u{FEFF}';

fn push_folded(out: &mut String, ch: char) {
    if !ch.is_whitespace() && ch != BOM {
        out.extend(ch.to_lowercase());
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a string for matching: split compound jamo, lower-case, and drop
/// all whitespace.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match decompose_jamo(ch) {
            Some(parts) => {
                for part in parts {
                    push_folded(&mut out, part);
                }
            }
            None => push_folded(&mut out, ch),
        }
    }
    out
}

/// Replace every Hangul syllable with its leading consonant. Characters
/// outside the syllable block pass through unchanged.
pub fn initials(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            let code = ch as u32;
            if (HANGUL_BASE..=HANGUL_LAST).contains(&code) {
                let index = ((code - HANGUL_BASE) / CHOSEONG_SPAN) as usize;
                CHOSEONG.get(index).copied().unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// How strongly a champion matched the query. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Initials start with the query (explicit choseong lookup).
    InitialsPrefix,
    /// Localized name, canonical name, or id starts with the query.
    NamePrefix,
    /// Initials contain the query further in.
    InitialsContains,
    /// Localized name, canonical name, or id contain the query further in.
    NameContains,
    /// No query: every champion is listed in roster order.
    Unranked,
}

/// Pre-normalized fields of one champion.
#[derive(Debug, Clone)]
pub struct SearchKey {
    name: String,
    name_ko: String,
    id: String,
    initials: String,
}

impl SearchKey {
    pub fn new(champion: &Champion) -> Self {
        SearchKey {
            name: normalize(&champion.name),
            name_ko: normalize(&champion.name_ko),
            id: normalize(&champion.id),
            initials: normalize(&initials(&champion.name_ko)),
        }
    }

    fn names(&self) -> [&str; 3] {
        [&self.name_ko, &self.name, &self.id]
    }

    /// Tier for an already-normalized query, or `None` when no field contains
    /// it and the champion must be left out.
    pub fn tier(&self, query: &str) -> Option<MatchTier> {
        if query.is_empty() {
            return Some(MatchTier::Unranked);
        }
        if self.initials.starts_with(query) {
            return Some(MatchTier::InitialsPrefix);
        }
        if self.names().iter().any(|f| f.starts_with(query)) {
            return Some(MatchTier::NamePrefix);
        }
        if self.initials.contains(query) {
            return Some(MatchTier::InitialsContains);
        }
        if self.names().iter().any(|f| f.contains(query)) {
            return Some(MatchTier::NameContains);
        }
        None
    }
}

/// One row of search output.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub champion: &'a Champion,
    pub tier: MatchTier,
    /// False when the champion already occupies a slot.
    pub selectable: bool,
    /// True when the champion is the armed selection.
    pub is_active: bool,
}

fn rank_keyed<'a, 'k>(
    entries: impl Iterator<Item = (&'a Champion, &'k SearchKey)>,
    query: &str,
    used: &HashSet<String>,
    active_id: Option<&str>,
) -> Vec<Candidate<'a>> {
    let query = normalize(query);

    let mut candidates: Vec<Candidate<'a>> = entries
        .filter_map(|(champion, key)| {
            key.tier(&query).map(|tier| Candidate {
                champion,
                tier,
                selectable: !used.contains(&champion.id),
                is_active: active_id == Some(champion.id.as_str()),
            })
        })
        .collect();

    if !query.is_empty() {
        candidates.sort_by(|a, b| {
            a.tier
                .cmp(&b.tier)
                .then_with(|| collate::compare(&a.champion.name_ko, &b.champion.name_ko))
        });
    }

    candidates
}

/// Filter and rank `roster` against `query`.
///
/// Pure: the result depends only on the arguments. An empty (or
/// whitespace-only) query keeps every champion in roster order.
pub fn rank<'a>(
    roster: &'a Roster,
    query: &str,
    used: &HashSet<String>,
    active_id: Option<&str>,
) -> Vec<Candidate<'a>> {
    let keys: Vec<SearchKey> = roster.iter().map(SearchKey::new).collect();
    rank_keyed(roster.iter().zip(keys.iter()), query, used, active_id)
}

/// A roster with its search keys computed once, for ranking on every
/// keystroke.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    roster: Roster,
    keys: Vec<SearchKey>,
}

impl SearchIndex {
    pub fn new(roster: Roster) -> Self {
        let keys = roster.iter().map(SearchKey::new).collect();
        SearchIndex { roster, keys }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Same result as [`rank`] over the indexed roster.
    pub fn rank(
        &self,
        query: &str,
        used: &HashSet<String>,
        active_id: Option<&str>,
    ) -> Vec<Candidate<'_>> {
        rank_keyed(self.roster.iter().zip(self.keys.iter()), query, used, active_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Korean ordering for display names.
//
// Every character expands to one or more sort units. Hangul syllables split
// into leading consonant, vowel and optional final; a bare compatibility jamo
// becomes the single unit it stands for, so "ㅎ" files just before "하".
// Units order as: separators, digits, Hangul leads, vowels, finals, Latin
// (case-insensitive), everything else. Hangul ahead of Latin and jamo among
// their syllables is how a Korean reader's dictionary sorts.

use std::cmp::Ordering;

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Compatibility jamo usable as a leading consonant, in choseong order.
const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Compatibility jamo usable as a final, in jongseong order (index 0 is "no
/// final" and has no jamo).
const TAILS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const VOWEL_FIRST: u32 = 0x314F; // ㅏ
const VOWEL_LAST: u32 = 0x3163; // ㅣ

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    Separator(u32),
    Digit(u32),
    Lead(u32),
    Vowel(u32),
    Tail(u32),
    Latin(u32),
    Other(u32),
}

fn units(ch: char) -> impl Iterator<Item = Unit> {
    let code = ch as u32;
    let parts = if (HANGUL_BASE..=HANGUL_LAST).contains(&code) {
        let offset = code - HANGUL_BASE;
        let lead = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
        let vowel = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
        let tail = offset % JONGSEONG_COUNT;
        [
            Some(Unit::Lead(lead)),
            Some(Unit::Vowel(vowel)),
            (tail > 0).then_some(Unit::Tail(tail)),
        ]
    } else {
        [Some(single_unit(ch)), None, None]
    };
    parts.into_iter().flatten()
}

fn single_unit(ch: char) -> Unit {
    let code = ch as u32;
    if ch.is_whitespace() || ch.is_ascii_punctuation() {
        return Unit::Separator(code);
    }
    if ch.is_ascii_digit() {
        return Unit::Digit(code);
    }
    if ch.is_ascii_alphabetic() {
        return Unit::Latin(ch.to_ascii_lowercase() as u32);
    }
    if let Some(i) = LEADS.iter().position(|&c| c == ch) {
        return Unit::Lead(i as u32);
    }
    if let Some(i) = TAILS.iter().position(|&c| c == ch) {
        return Unit::Tail(i as u32 + 1);
    }
    if (VOWEL_FIRST..=VOWEL_LAST).contains(&code) {
        return Unit::Vowel(code - VOWEL_FIRST);
    }
    Unit::Other(code)
}

/// Compare two display names.
///
/// Names that are equal under the sort units fall back to plain string order
/// so the result is total and deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(units)
        .cmp(b.chars().flat_map(units))
        .then_with(|| a.cmp(b))
}

//! Static niqqud catalog and Hebrew letter tables.
//!
//! # Responsibility
//! - Hold the fixed, ordered list of every known niqqud.
//! - Derive canonical group order and per-group listings from it.
//!
//! # Invariants
//! - Tables are built once on first use and never mutated afterwards.
//! - Group order is the ascending list of distinct group ids; letter
//!   rendering follows it.
//! - Within a group, catalog order is preserved. Glyph lookups resolve to
//!   the first matching entry in this order.

use crate::model::niqqud::{Niqqud, NiqqudGroup, GROUP_DAGESH, GROUP_SHIN_DOT, GROUP_VOWEL};
use once_cell::sync::Lazy;
use serde::Serialize;

const ALEF: char = '\u{05D0}';
const BET: char = '\u{05D1}';
const VAV: char = '\u{05D5}';
const YOD: char = '\u{05D9}';
const FINAL_KAF: char = '\u{05DA}';
const KAF: char = '\u{05DB}';
const FINAL_PE: char = '\u{05E3}';
const PE: char = '\u{05E4}';
const SHIN: char = '\u{05E9}';
const DOUBLE_YOD: char = '\u{05F2}';

/// Every code point treated as a Hebrew base letter, final forms and the
/// Yiddish ligatures included.
pub const HEBREW_LETTERS: &[char] = &[
    ALEF, BET, '\u{05D2}', '\u{05D3}', '\u{05D4}', VAV, '\u{05D6}', '\u{05D7}', '\u{05D8}', YOD,
    KAF, FINAL_KAF, '\u{05DC}', '\u{05DE}', '\u{05DD}', '\u{05E0}', '\u{05DF}', '\u{05E1}',
    '\u{05E2}', PE, FINAL_PE, '\u{05E6}', '\u{05E5}', '\u{05E7}', '\u{05E8}', SHIN, '\u{05EA}',
    '\u{05F0}', '\u{05F1}', DOUBLE_YOD,
];

/// The 22 letters of the alphabet without final forms.
pub const NON_FINAL_HEBREW_LETTERS: &[char] = &[
    ALEF, BET, '\u{05D2}', '\u{05D3}', '\u{05D4}', VAV, '\u{05D6}', '\u{05D7}', '\u{05D8}', YOD,
    KAF, '\u{05DC}', '\u{05DE}', '\u{05E0}', '\u{05E1}', '\u{05E2}', PE, '\u{05E6}', '\u{05E7}',
    '\u{05E8}', SHIN, '\u{05EA}',
];

/// Returns whether `c` starts a new letter when scanning text.
pub fn is_hebrew_letter(c: char) -> bool {
    HEBREW_LETTERS.contains(&c)
}

/// The full catalog, in definition order.
pub static ALL_NIQQUD: Lazy<Vec<Niqqud>> = Lazy::new(|| {
    vec![
        Niqqud::with_extra_letters("\u{05B0}", GROUP_VOWEL, "sheva", &[FINAL_KAF]),
        // a
        Niqqud::new("\u{05B2}", GROUP_VOWEL, "hataf patah"),
        Niqqud::with_extra_letters("\u{05B7}", GROUP_VOWEL, "patah", &[DOUBLE_YOD]),
        Niqqud::with_extra_letters("\u{05B8}", GROUP_VOWEL, "qamats", &[FINAL_KAF]),
        // e
        Niqqud::new("\u{05B1}", GROUP_VOWEL, "hataf segol"),
        Niqqud::new("\u{05B6}", GROUP_VOWEL, "segol"),
        Niqqud::new("\u{05B5}", GROUP_VOWEL, "tsere"),
        // i
        Niqqud::new("\u{05B4}", GROUP_VOWEL, "hiriq"),
        // o
        Niqqud::new("\u{05B3}", GROUP_VOWEL, "hataf qamats"),
        Niqqud::new("\u{05B9}", GROUP_VOWEL, "holam"),
        // Holam haser on vav is encoded with the dedicated U+05BA point; the
        // sin-dot workaround renders inconsistently across fonts.
        Niqqud::with_letters("\u{05BA}", GROUP_VOWEL, "holam haser for vav", [VAV]),
        // u
        Niqqud::new("\u{05BB}", GROUP_VOWEL, "qubuts"),
        Niqqud::with_letters("\u{05C1}", GROUP_SHIN_DOT, "shin dot", [SHIN]),
        Niqqud::with_letters("\u{05C2}", GROUP_SHIN_DOT, "sin dot", [SHIN]),
        Niqqud::with_extra_letters("\u{05BC}", GROUP_DAGESH, "dagesh", &[FINAL_KAF, FINAL_PE]),
        Niqqud::with_letters("\u{05BF}", GROUP_DAGESH, "rafe", [BET, KAF, PE]),
    ]
});

static NIQQUD_GROUPS: Lazy<Vec<NiqqudGroup>> = Lazy::new(|| {
    let mut groups: Vec<NiqqudGroup> = Vec::new();
    for niqqud in ALL_NIQQUD.iter() {
        if !groups.contains(&niqqud.group) {
            groups.push(niqqud.group);
        }
    }
    groups.sort_unstable();
    groups
});

static NIQQUD_BY_GROUPS: Lazy<Vec<GroupNiqqud>> = Lazy::new(|| {
    niqqud_groups()
        .iter()
        .map(|&group| GroupNiqqud {
            group,
            niqqud: niqqud_in_group(group).collect(),
        })
        .collect()
});

/// One group together with a subset of its niqqud, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNiqqud {
    pub group: NiqqudGroup,
    pub niqqud: Vec<&'static Niqqud>,
}

/// Distinct group ids in the catalog, ascending.
pub fn niqqud_groups() -> &'static [NiqqudGroup] {
    &NIQQUD_GROUPS
}

/// Every group with all of its niqqud, in canonical group order.
pub fn niqqud_by_groups() -> &'static [GroupNiqqud] {
    &NIQQUD_BY_GROUPS
}

/// Niqqud of one group in catalog order.
pub fn niqqud_in_group(group: NiqqudGroup) -> impl Iterator<Item = &'static Niqqud> {
    ALL_NIQQUD.iter().filter(move |niqqud| niqqud.group == group)
}

/// All catalog entries whose glyph is exactly `glyph`, in catalog order.
pub fn find_by_glyph(glyph: &str) -> impl Iterator<Item = &'static Niqqud> + '_ {
    ALL_NIQQUD.iter().filter(move |niqqud| niqqud.glyph == glyph)
}

/// Catalog entries applicable to `consonant`, grouped in canonical order.
///
/// Groups without any applicable entry are omitted.
pub fn applicable_niqqud(consonant: Option<char>) -> Vec<GroupNiqqud> {
    niqqud_by_groups()
        .iter()
        .filter_map(|entry| {
            let niqqud: Vec<&'static Niqqud> = entry
                .niqqud
                .iter()
                .copied()
                .filter(|niqqud| niqqud.is_applicable_to(consonant))
                .collect();
            (!niqqud.is_empty()).then_some(GroupNiqqud {
                group: entry.group,
                niqqud,
            })
        })
        .collect()
}

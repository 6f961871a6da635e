//! Niqqud (diacritic) definition.
//!
//! # Responsibility
//! - Describe one diacritic mark: its glyph, mutual-exclusion group and the
//!   base letters it may attach to.
//! - Answer applicability questions for a given consonant.
//!
//! # Invariants
//! - Every niqqud belongs to exactly one group.
//! - `applicable_letters` is fixed at construction and never mutated.
//! - An empty applicability set means "applicable to any consonant".

use crate::model::catalog::NON_FINAL_HEBREW_LETTERS;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Mutual-exclusion class id. At most one niqqud per group sits on a letter.
pub type NiqqudGroup = u8;

/// Vowel points.
pub const GROUP_VOWEL: NiqqudGroup = 0;
/// Shin and sin dots.
pub const GROUP_SHIN_DOT: NiqqudGroup = 1;
/// Dagesh (or mapiq) and rafe.
pub const GROUP_DAGESH: NiqqudGroup = 2;

/// One diacritic mark as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Niqqud {
    /// Code point(s) this niqqud contributes to a rendered letter.
    pub glyph: &'static str,
    /// Mutual-exclusion group.
    pub group: NiqqudGroup,
    /// Human-readable name, e.g. `patah`.
    pub name: &'static str,
    /// Consonants this niqqud may attach to. Empty means any.
    applicable_letters: Vec<char>,
}

impl Niqqud {
    /// Creates a niqqud applicable to the non-final Hebrew letters.
    ///
    /// This is the default for marks that are not explicitly restricted or
    /// widened.
    pub fn new(glyph: &'static str, group: NiqqudGroup, name: &'static str) -> Self {
        Self::with_letters(glyph, group, name, NON_FINAL_HEBREW_LETTERS.iter().copied())
    }

    /// Creates a niqqud restricted to exactly `letters`.
    ///
    /// Passing an empty iterator yields a universal niqqud.
    pub fn with_letters(
        glyph: &'static str,
        group: NiqqudGroup,
        name: &'static str,
        letters: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut applicable_letters: Vec<char> = Vec::new();
        for letter in letters {
            if !applicable_letters.contains(&letter) {
                applicable_letters.push(letter);
            }
        }
        Self {
            glyph,
            group,
            name,
            applicable_letters,
        }
    }

    /// Creates a niqqud that may attach to any consonant.
    pub fn universal(glyph: &'static str, group: NiqqudGroup, name: &'static str) -> Self {
        Self::with_letters(glyph, group, name, std::iter::empty())
    }

    /// Creates a niqqud applicable to the non-final letters plus `extra`.
    pub(crate) fn with_extra_letters(
        glyph: &'static str,
        group: NiqqudGroup,
        name: &'static str,
        extra: &[char],
    ) -> Self {
        Self::with_letters(
            glyph,
            group,
            name,
            NON_FINAL_HEBREW_LETTERS
                .iter()
                .chain(extra.iter())
                .copied(),
        )
    }

    /// Consonants this niqqud may attach to. Empty means any.
    pub fn applicable_letters(&self) -> &[char] {
        &self.applicable_letters
    }

    /// Returns whether this niqqud may sit on `consonant`.
    ///
    /// A missing consonant means there is no letter context, so every
    /// niqqud is considered applicable.
    pub fn is_applicable_to(&self, consonant: Option<char>) -> bool {
        match consonant {
            None => true,
            Some(_) if self.applicable_letters.is_empty() => true,
            Some(letter) => self.applicable_letters.contains(&letter),
        }
    }

    /// Returns whether the glyph is exactly the single code point `c`.
    pub fn glyph_is(&self, c: char) -> bool {
        let mut chars = self.glyph.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

impl Display for Niqqud {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (", self.name)?;
        for (idx, c) in self.glyph.chars().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "U+{:04X}", c as u32)?;
        }
        write!(f, ", group {})", self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::{Niqqud, GROUP_DAGESH, GROUP_VOWEL};

    #[test]
    fn default_applicability_excludes_final_letters() {
        let hiriq = Niqqud::new("\u{05B4}", GROUP_VOWEL, "hiriq");
        assert!(hiriq.is_applicable_to(Some('\u{05D9}')));
        assert!(!hiriq.is_applicable_to(Some('\u{05DA}')));
        assert!(!hiriq.is_applicable_to(Some('a')));
    }

    #[test]
    fn missing_consonant_is_always_applicable() {
        let rafe = Niqqud::with_letters("\u{05BF}", GROUP_DAGESH, "rafe", ['\u{05D1}']);
        assert!(rafe.is_applicable_to(None));
    }

    #[test]
    fn universal_niqqud_accepts_any_consonant() {
        let mark = Niqqud::universal("\u{05BD}", GROUP_VOWEL, "meteg");
        assert!(mark.applicable_letters().is_empty());
        assert!(mark.is_applicable_to(Some('x')));
        assert!(mark.is_applicable_to(Some('\u{05DA}')));
    }

    #[test]
    fn duplicate_letters_are_collapsed() {
        let mark = Niqqud::with_letters("\u{05BC}", GROUP_DAGESH, "dagesh", ['a', 'b', 'a']);
        assert_eq!(mark.applicable_letters(), &['a', 'b']);
    }

    #[test]
    fn glyph_is_matches_single_code_point_only() {
        let single = Niqqud::universal("\u{05B4}", GROUP_VOWEL, "hiriq");
        let double = Niqqud::universal("\u{200C}\u{05BA}", GROUP_VOWEL, "joined");
        assert!(single.glyph_is('\u{05B4}'));
        assert!(!double.glyph_is('\u{200C}'));
        assert!(!double.glyph_is('\u{05BA}'));
    }

    #[test]
    fn display_names_code_points() {
        let hiriq = Niqqud::new("\u{05B4}", GROUP_VOWEL, "hiriq");
        assert_eq!(hiriq.to_string(), "hiriq (U+05B4, group 0)");
    }
}

//! Hebrew text scanner.
//!
//! # Responsibility
//! - Turn raw text into a letter sequence, one code point at a time.
//! - Classify each non-letter code point as an unrecognized character, a
//!   recognized but inapplicable niqqud, or an applicable niqqud.
//!
//! # Invariants
//! - Parsing is total: every input yields a sequence, never an error.
//! - A niqqud only attaches to the current letter when it applies to that
//!   letter's consonant.
//! - Ambiguous glyphs resolve to the first applicable entry in catalog order.

use crate::model::catalog::{is_hebrew_letter, ALL_NIQQUD};
use crate::model::letter::LetterInstance;
use crate::model::niqqud::Niqqud;
use crate::model::sequence::LetterSequence;
use crate::parser::ligature::expand_ligatures;
use log::debug;

/// Outcome of resolving one code point against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NiqqudLookup<'a> {
    /// No catalog entry has this glyph.
    Unrecognized,
    /// Entries exist but none applies to the consonant. Carries the first
    /// same-glyph entry in catalog order.
    Inapplicable(&'a Niqqud),
    /// First applicable entry in catalog order.
    Applicable(&'a Niqqud),
}

/// Resolves `glyph` against the built-in catalog, constrained by `consonant`.
pub fn lookup_niqqud(glyph: char, consonant: Option<char>) -> NiqqudLookup<'static> {
    lookup_in(&ALL_NIQQUD, glyph, consonant)
}

/// Resolves `glyph` against `catalog`, constrained by `consonant`.
pub fn lookup_in(catalog: &[Niqqud], glyph: char, consonant: Option<char>) -> NiqqudLookup<'_> {
    let mut first_inapplicable: Option<&Niqqud> = None;

    for niqqud in catalog {
        if !niqqud.glyph_is(glyph) {
            continue;
        }
        if niqqud.is_applicable_to(consonant) {
            return NiqqudLookup::Applicable(niqqud);
        }
        first_inapplicable.get_or_insert(niqqud);
    }

    match first_inapplicable {
        Some(niqqud) => NiqqudLookup::Inapplicable(niqqud),
        None => NiqqudLookup::Unrecognized,
    }
}

/// Parses `text` into an ordered letter sequence.
///
/// Precomposed presentation forms are expanded first. Characters that are
/// neither Hebrew letters nor niqqud pass through as their own letters, and
/// niqqud that cannot attach become standalone squares.
pub fn parse_hebrew_text(text: &str) -> LetterSequence {
    let expanded = expand_ligatures(text);
    let mut letters: Vec<LetterInstance> = Vec::new();
    // Index of the letter that may still receive niqqud.
    let mut current: Option<usize> = None;
    let mut orphans = 0usize;

    for c in expanded.chars() {
        if is_hebrew_letter(c) {
            letters.push(LetterInstance::new(c));
            current = Some(letters.len() - 1);
            continue;
        }

        let consonant = current.and_then(|idx| letters[idx].consonant());
        match lookup_niqqud(c, consonant) {
            NiqqudLookup::Unrecognized => {
                letters.push(LetterInstance::new(c));
                current = Some(letters.len() - 1);
            }
            NiqqudLookup::Inapplicable(niqqud) => {
                current = None;
                letters.push(standalone_square(niqqud));
                orphans += 1;
            }
            NiqqudLookup::Applicable(niqqud) => match current {
                Some(idx) => attach(&mut letters[idx], niqqud),
                None => {
                    letters.push(standalone_square(niqqud));
                    orphans += 1;
                }
            },
        }
    }

    debug!(
        "event=text_parsed module=parser status=ok letters={} orphans={}",
        letters.len(),
        orphans
    );
    LetterSequence::from(letters)
}

fn standalone_square(niqqud: &Niqqud) -> LetterInstance {
    let mut square = LetterInstance::standalone();
    attach(&mut square, niqqud);
    square
}

fn attach(letter: &mut LetterInstance, niqqud: &Niqqud) {
    // Lookup already checked applicability against this consonant, and a
    // standalone square accepts every niqqud.
    let attached = letter.add_niqqud(niqqud);
    debug_assert!(
        attached.is_ok(),
        "lookup returned a niqqud the letter rejects: {attached:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::{lookup_in, lookup_niqqud, parse_hebrew_text, NiqqudLookup};
    use crate::model::niqqud::{Niqqud, GROUP_SHIN_DOT};

    #[test]
    fn lookup_distinguishes_three_outcomes() {
        assert_eq!(lookup_niqqud('a', Some('\u{05D0}')), NiqqudLookup::Unrecognized);
        assert!(matches!(
            lookup_niqqud('\u{05C1}', Some('\u{05D0}')),
            NiqqudLookup::Inapplicable(n) if n.name == "shin dot"
        ));
        assert!(matches!(
            lookup_niqqud('\u{05C1}', Some('\u{05E9}')),
            NiqqudLookup::Applicable(n) if n.name == "shin dot"
        ));
    }

    #[test]
    fn lookup_without_consonant_is_unconstrained() {
        assert!(matches!(
            lookup_niqqud('\u{05BA}', None),
            NiqqudLookup::Applicable(n) if n.name == "holam haser for vav"
        ));
    }

    #[test]
    fn ambiguous_glyph_resolves_by_catalog_order() {
        let catalog = vec![
            Niqqud::with_letters("\u{05C2}", GROUP_SHIN_DOT, "sin dot", ['\u{05E9}']),
            Niqqud::with_letters("\u{05C2}", GROUP_SHIN_DOT, "holam on vav", ['\u{05D5}']),
            Niqqud::universal("\u{05C2}", GROUP_SHIN_DOT, "fallback"),
        ];

        assert!(matches!(
            lookup_in(&catalog, '\u{05C2}', Some('\u{05D5}')),
            NiqqudLookup::Applicable(n) if n.name == "holam on vav"
        ));
        assert!(matches!(
            lookup_in(&catalog, '\u{05C2}', Some('\u{05D0}')),
            NiqqudLookup::Applicable(n) if n.name == "fallback"
        ));
        assert!(matches!(
            lookup_in(&catalog[..2], '\u{05C2}', Some('\u{05D0}')),
            NiqqudLookup::Inapplicable(n) if n.name == "sin dot"
        ));
        assert!(matches!(
            lookup_in(&catalog, '\u{05C2}', None),
            NiqqudLookup::Applicable(n) if n.name == "sin dot"
        ));
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(parse_hebrew_text("").is_empty());
    }

    #[test]
    fn niqqud_after_space_becomes_standalone() {
        let letters = parse_hebrew_text(" \u{05B4}");
        assert_eq!(letters.len(), 2);
        assert_eq!(letters.get(0).unwrap().representation(), " ");
        assert!(letters.get(1).unwrap().is_standalone());
        assert_eq!(letters.get(1).unwrap().representation(), "\u{05B4}");
    }

    #[test]
    fn every_attached_niqqud_applies_to_its_letter() {
        let letters = parse_hebrew_text(
            "\u{05B4}\u{05E9}\u{05BC}\u{05C2}\u{05BA}\u{05D5}\u{05BA}a\u{05BF}\u{05DA}\u{05B8}\u{05BC}",
        );
        for letter in &letters {
            for niqqud in letter.attached_niqqud() {
                assert!(niqqud.is_applicable_to(letter.consonant()), "{niqqud}");
            }
        }
        assert_eq!(letters.len(), 7);
    }

    #[test]
    fn second_vowel_replaces_first() {
        let letters = parse_hebrew_text("\u{05D1}\u{05B7}\u{05B8}");
        assert_eq!(letters.len(), 1);
        assert_eq!(letters.get(0).unwrap().representation(), "\u{05D1}\u{05B8}");
    }
}

//! Precomposed presentation-form expansion.
//!
//! Some legacy code points fold a letter and its niqqud into one character.
//! Expanding them first lets the scanner treat every niqqud as a separate
//! code point following its consonant.

use once_cell::sync::Lazy;

const DAGESH: char = '\u{05BC}';
const FIRST_DAGESH_FORM: u32 = 0xFB30;
const ALEF: u32 = 0x05D0;

/// Presentation forms "letter with dagesh". U+FB37, U+FB3D, U+FB3F, U+FB42
/// and U+FB45 are unassigned.
const DAGESH_FORMS: &[char] = &[
    '\u{FB30}', '\u{FB31}', '\u{FB32}', '\u{FB33}', '\u{FB34}', '\u{FB35}', '\u{FB36}', '\u{FB38}',
    '\u{FB39}', '\u{FB3A}', '\u{FB3B}', '\u{FB3C}', '\u{FB3E}', '\u{FB40}', '\u{FB41}', '\u{FB43}',
    '\u{FB44}', '\u{FB46}', '\u{FB47}', '\u{FB48}', '\u{FB49}', '\u{FB4A}',
];

/// Ordered `(precomposed, expansion)` pairs, applied in this order.
pub static PRE_BAKED_NIQQUD: Lazy<Vec<(char, String)>> = Lazy::new(|| {
    let mut table: Vec<(char, String)> = DAGESH_FORMS
        .iter()
        .filter_map(|&form| {
            let base = char::from_u32(form as u32 - FIRST_DAGESH_FORM + ALEF)?;
            Some((form, [base, DAGESH].iter().collect()))
        })
        .collect();

    let others: [(char, &str); 12] = [
        ('\u{FB1D}', "\u{05D9}\u{05B4}"),       // yod with hiriq
        ('\u{FB2A}', "\u{05E9}\u{05C1}"),       // shin with shin dot
        ('\u{FB2B}', "\u{05E9}\u{05C2}"),       // shin with sin dot
        ('\u{FB2C}', "\u{05E9}\u{05C1}\u{05BC}"), // shin with dagesh and shin dot
        ('\u{FB2D}', "\u{05E9}\u{05C2}\u{05BC}"), // shin with dagesh and sin dot
        ('\u{FB2E}', "\u{05D0}\u{05B7}"),       // alef with patah
        ('\u{FB2F}', "\u{05D0}\u{05B8}"),       // alef with qamats
        ('\u{FB4B}', "\u{05D5}\u{05B9}"),       // vav with holam
        ('\u{FB4C}', "\u{05D1}\u{05BF}"),       // bet with rafe
        ('\u{FB4D}', "\u{05DB}\u{05BF}"),       // kaf with rafe
        ('\u{FB4E}', "\u{05E4}\u{05BF}"),       // pe with rafe
        ('\u{FB1F}', "\u{05F2}\u{05B7}"),       // double yod with patah
    ];
    table.extend(
        others
            .iter()
            .map(|&(form, expansion)| (form, expansion.to_string())),
    );
    table
});

/// Replaces every occurrence of every precomposed form with its expansion.
pub fn expand_ligatures(text: &str) -> String {
    let mut expanded = text.to_string();
    for (form, expansion) in PRE_BAKED_NIQQUD.iter() {
        if expanded.contains(*form) {
            expanded = expanded.replace(*form, expansion);
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::{expand_ligatures, PRE_BAKED_NIQQUD};

    #[test]
    fn table_has_dagesh_forms_then_named_forms() {
        assert_eq!(PRE_BAKED_NIQQUD.len(), 34);
        assert_eq!(PRE_BAKED_NIQQUD[0], ('\u{FB30}', "\u{05D0}\u{05BC}".to_string()));
        assert_eq!(PRE_BAKED_NIQQUD[21], ('\u{FB4A}', "\u{05EA}\u{05BC}".to_string()));
        assert_eq!(PRE_BAKED_NIQQUD[22].0, '\u{FB1D}');
    }

    #[test]
    fn dagesh_form_maps_to_matching_letter() {
        assert_eq!(expand_ligatures("\u{FB44}"), "\u{05E4}\u{05BC}");
        assert_eq!(expand_ligatures("\u{FB3A}"), "\u{05DA}\u{05BC}");
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            expand_ligatures("\u{FB1D}x\u{FB1D}"),
            "\u{05D9}\u{05B4}x\u{05D9}\u{05B4}"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(expand_ligatures("abc \u{05D0}"), "abc \u{05D0}");
        assert_eq!(expand_ligatures(""), "");
    }
}

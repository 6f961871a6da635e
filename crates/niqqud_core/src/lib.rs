//! Core model and parser for Hebrew text with niqqud.
//! This crate is the single source of truth for letter/niqqud invariants.

pub mod logging;
pub mod model;
pub mod parser;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::catalog::{
    applicable_niqqud, find_by_glyph, is_hebrew_letter, niqqud_by_groups, niqqud_groups,
    niqqud_in_group, GroupNiqqud, ALL_NIQQUD, HEBREW_LETTERS, NON_FINAL_HEBREW_LETTERS,
};
pub use model::letter::{LetterInstance, NiqqudError, NiqqudResult};
pub use model::niqqud::{Niqqud, NiqqudGroup, GROUP_DAGESH, GROUP_SHIN_DOT, GROUP_VOWEL};
pub use model::sequence::LetterSequence;
pub use parser::ligature::{expand_ligatures, PRE_BAKED_NIQQUD};
pub use parser::text::{lookup_niqqud, parse_hebrew_text, NiqqudLookup};
pub use service::session::{EditSession, SessionError, SessionResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! FFI use-case API for the editor UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Treat the full text as the only state crossing the boundary: every edit
//!   takes the current text and returns the new one.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Letter indices refer to positions in `parse_text(text).letters`.

use log::warn;
use niqqud_core::{
    core_version as core_version_inner, find_by_glyph, init_logging as init_logging_inner,
    EditSession, LetterInstance,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered letter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterView {
    /// Position in the parsed sequence.
    pub index: u32,
    /// Base character; `None` for a standalone niqqud square.
    pub consonant: Option<String>,
    /// Attached glyphs in canonical order.
    pub niqqud: Vec<String>,
    /// Text shown for this block.
    pub representation: String,
}

/// Parsed letters of one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTextResponse {
    pub letters: Vec<LetterView>,
    /// Canonical re-rendering of the input.
    pub text: String,
}

/// One key of the niqqud keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardKey {
    pub glyph: String,
    pub name: String,
    /// Consonant plus this glyph only.
    pub preview: String,
    /// Whether the letter currently carries this niqqud.
    pub selected: bool,
}

/// Keys of one mutual-exclusion group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardGroup {
    pub group: u8,
    pub keys: Vec<KeyboardKey>,
}

/// Keyboard for one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardResponse {
    pub ok: bool,
    pub groups: Vec<KeyboardGroup>,
    pub message: String,
}

/// Result envelope for text edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResponse {
    /// Whether the edit was applied.
    pub ok: bool,
    /// Text after the edit; the canonical input text on failure.
    pub text: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EditResponse {
    fn applied(session: &EditSession, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: session.full_text(),
            message: message.into(),
        }
    }

    fn rejected(session: &EditSession, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: session.full_text(),
            message: message.into(),
        }
    }
}

/// Parses text into letter blocks.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never fails; unknown characters become their own blocks.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_text(text: String) -> ParseTextResponse {
    let session = EditSession::from_text(&text);
    ParseTextResponse {
        letters: session
            .letters()
            .iter()
            .enumerate()
            .map(|(index, letter)| to_letter_view(index, letter))
            .collect(),
        text: session.full_text(),
    }
}

/// Lists niqqud that may be toggled on the letter at `index`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Out-of-range index returns `ok=false` with empty groups.
#[flutter_rust_bridge::frb(sync)]
pub fn letter_keyboard(text: String, index: u32) -> KeyboardResponse {
    let session = EditSession::from_text(&text);
    let Some(letter) = session.letters().get(index as usize) else {
        return KeyboardResponse {
            ok: false,
            groups: Vec::new(),
            message: format!(
                "letter index {index} is out of range (len {})",
                session.letters().len()
            ),
        };
    };

    let groups = letter
        .applicable_niqqud_by_groups()
        .iter()
        .map(|group| KeyboardGroup {
            group: group.group,
            keys: group
                .niqqud
                .iter()
                .map(|niqqud| KeyboardKey {
                    glyph: niqqud.glyph.to_string(),
                    name: niqqud.name.to_string(),
                    preview: letter.preview_with(niqqud),
                    selected: letter.has_niqqud(niqqud),
                })
                .collect(),
        })
        .collect();

    KeyboardResponse {
        ok: true,
        groups,
        message: String::new(),
    }
}

/// Toggles the niqqud `glyph` on the letter at `index` of `text`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; unknown glyphs, bad indices and inapplicable niqqud
///   return `ok=false` with the unchanged (canonical) text.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_niqqud(text: String, index: u32, glyph: String) -> EditResponse {
    let mut session = EditSession::from_text(&text);
    let Some(niqqud) = find_by_glyph(&glyph).next() else {
        return EditResponse::rejected(&session, "toggle_niqqud failed: unknown niqqud");
    };

    match session.toggle_at(index as usize, niqqud) {
        Ok(true) => EditResponse::applied(&session, format!("{} added.", niqqud.name)),
        Ok(false) => EditResponse::applied(&session, format!("{} removed.", niqqud.name)),
        Err(err) => {
            warn!("event=ffi_toggle module=ffi status=error index={index}");
            EditResponse::rejected(&session, format!("toggle_niqqud failed: {err}"))
        }
    }
}

/// Replaces the consonant of the letter at `index` of `text`.
///
/// `consonant` must be empty (standalone square) or exactly one character.
/// Niqqud that no longer apply are dropped.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; invalid input returns `ok=false` with the canonical text.
#[flutter_rust_bridge::frb(sync)]
pub fn set_consonant(text: String, index: u32, consonant: String) -> EditResponse {
    let mut session = EditSession::from_text(&text);
    let mut chars = consonant.chars();
    let replacement = match (chars.next(), chars.next()) {
        (None, _) => None,
        (Some(c), None) => Some(c),
        (Some(_), Some(_)) => {
            return EditResponse::rejected(
                &session,
                "set_consonant failed: consonant must be a single character",
            );
        }
    };

    match session.set_consonant_at(index as usize, replacement) {
        Ok(()) => EditResponse::applied(&session, "Consonant replaced."),
        Err(err) => EditResponse::rejected(&session, format!("set_consonant failed: {err}")),
    }
}

fn to_letter_view(index: usize, letter: &LetterInstance) -> LetterView {
    LetterView {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        consonant: letter.consonant().map(String::from),
        niqqud: letter
            .attached_niqqud()
            .map(|niqqud| niqqud.glyph.to_string())
            .collect(),
        representation: letter.representation(),
    }
}

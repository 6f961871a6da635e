//! Interactive editing session.
//!
//! # Responsibility
//! - Hold the live letter sequence for one edited text.
//! - Track which letter is selected and apply niqqud toggles to it.
//!
//! # Invariants
//! - Selection is an index into the owned sequence, never an owner.
//! - Replacing the full text clears the selection.
//! - Removing the selected letter clears the selection; removing an earlier
//!   letter shifts it so it keeps pointing at the same letter.

use crate::model::letter::{LetterInstance, NiqqudError};
use crate::model::niqqud::Niqqud;
use crate::model::sequence::LetterSequence;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level editing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation on the selected letter ran with nothing selected.
    NoSelection,
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    Niqqud(NiqqudError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no letter is selected"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "letter index {index} is out of range (len {len})")
            }
            Self::Niqqud(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Niqqud(err) => Some(err),
            Self::NoSelection | Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<NiqqudError> for SessionError {
    fn from(value: NiqqudError) -> Self {
        Self::Niqqud(value)
    }
}

/// Live model behind a niqqud editor.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    letters: LetterSequence,
    selected: Option<usize>,
}

impl EditSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over the parsed `text`.
    pub fn from_text(text: &str) -> Self {
        let mut session = Self::new();
        session.set_full_text(text);
        session
    }

    /// Renders the current letters back into text.
    pub fn full_text(&self) -> String {
        self.letters.render()
    }

    /// Replaces the whole text and clears the selection.
    pub fn set_full_text(&mut self, text: &str) {
        self.selected = None;
        self.letters = if text.is_empty() {
            LetterSequence::new()
        } else {
            LetterSequence::parse(text)
        };
    }

    pub fn letters(&self) -> &LetterSequence {
        &self.letters
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_letter(&self) -> Option<&LetterInstance> {
        self.selected.and_then(|idx| self.letters.get(idx))
    }

    /// Selects the letter at `index`, or clears the selection when that
    /// letter is already selected.
    ///
    /// Returns the selection after the call.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` when no letter exists at `index`.
    pub fn select(&mut self, index: usize) -> SessionResult<Option<usize>> {
        self.check_index(index)?;
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.selected)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Toggles `niqqud` on the selected letter.
    ///
    /// Returns whether the niqqud is attached afterwards.
    ///
    /// # Errors
    /// - Returns `NoSelection` when nothing is selected.
    /// - Returns `Niqqud` when the niqqud does not apply to the letter.
    pub fn toggle_on_selected(&mut self, niqqud: &Niqqud) -> SessionResult<bool> {
        let index = self.selected.ok_or(SessionError::NoSelection)?;
        self.toggle_at(index, niqqud)
    }

    /// Toggles `niqqud` on the letter at `index`.
    ///
    /// Returns whether the niqqud is attached afterwards.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` when no letter exists at `index`.
    /// - Returns `Niqqud` when the niqqud does not apply to the letter.
    pub fn toggle_at(&mut self, index: usize, niqqud: &Niqqud) -> SessionResult<bool> {
        let len = self.letters.len();
        let letter = self
            .letters
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        letter.toggle_niqqud(niqqud)?;
        let attached = letter.has_niqqud(niqqud);
        debug!(
            "event=niqqud_toggled module=session status=ok index={index} attached={attached}"
        );
        Ok(attached)
    }

    /// Replaces the consonant of the letter at `index`.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` when no letter exists at `index`.
    pub fn set_consonant_at(&mut self, index: usize, consonant: Option<char>) -> SessionResult<()> {
        let len = self.letters.len();
        self.letters
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?
            .set_consonant(consonant);
        Ok(())
    }

    /// Removes the letter at `index` and keeps the selection consistent.
    ///
    /// # Errors
    /// - Returns `IndexOutOfRange` when no letter exists at `index`.
    pub fn remove_letter(&mut self, index: usize) -> SessionResult<LetterInstance> {
        let len = self.letters.len();
        let removed = self
            .letters
            .remove(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> SessionResult<()> {
        if index < self.letters.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                len: self.letters.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditSession, SessionError};

    #[test]
    fn empty_text_has_no_letters() {
        let session = EditSession::from_text("");
        assert!(session.letters().is_empty());
        assert_eq!(session.full_text(), "");
    }

    #[test]
    fn select_twice_clears_selection() {
        let mut session = EditSession::from_text("\u{05D0}\u{05D1}");
        assert_eq!(session.select(1).unwrap(), Some(1));
        assert_eq!(session.select(1).unwrap(), None);
        assert_eq!(session.select(0).unwrap(), Some(0));
        assert_eq!(session.select(1).unwrap(), Some(1));
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut session = EditSession::from_text("\u{05D0}");
        assert_eq!(
            session.select(4).unwrap_err(),
            SessionError::IndexOutOfRange { index: 4, len: 1 }
        );
    }

    #[test]
    fn set_full_text_clears_selection() {
        let mut session = EditSession::from_text("\u{05D0}");
        session.select(0).unwrap();
        session.set_full_text("\u{05D1}");
        assert_eq!(session.selected_index(), None);
    }

    #[test]
    fn removing_earlier_letter_shifts_selection() {
        let mut session = EditSession::from_text("\u{05D0}\u{05D1}\u{05D2}");
        session.select(2).unwrap();
        session.remove_letter(0).unwrap();
        assert_eq!(session.selected_index(), Some(1));
        assert_eq!(session.selected_letter().unwrap().consonant(), Some('\u{05D2}'));

        session.remove_letter(1).unwrap();
        assert_eq!(session.selected_index(), None);
    }
}

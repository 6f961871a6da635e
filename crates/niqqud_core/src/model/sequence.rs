//! Ordered letter sequence.
//!
//! # Responsibility
//! - Own the letters of one parsed text in serialization order.
//! - Render the whole text back from the live letters.

use crate::model::letter::LetterInstance;
use serde::Serialize;

/// Letters of a full text, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterSequence {
    letters: Vec<LetterInstance>,
}

impl LetterSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` into letters. See [`crate::parse_hebrew_text`].
    pub fn parse(text: &str) -> Self {
        crate::parser::text::parse_hebrew_text(text)
    }

    /// Concatenates every letter's representation in order.
    pub fn render(&self) -> String {
        self.letters
            .iter()
            .map(LetterInstance::representation)
            .collect()
    }

    pub fn push(&mut self, letter: LetterInstance) {
        self.letters.push(letter);
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LetterInstance> {
        self.letters.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LetterInstance> {
        self.letters.get_mut(index)
    }

    /// Removes and returns the letter at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<LetterInstance> {
        (index < self.letters.len()).then(|| self.letters.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterInstance> {
        self.letters.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, LetterInstance> {
        self.letters.iter_mut()
    }

    pub fn as_slice(&self) -> &[LetterInstance] {
        &self.letters
    }

    pub fn into_vec(self) -> Vec<LetterInstance> {
        self.letters
    }
}

impl From<Vec<LetterInstance>> for LetterSequence {
    fn from(letters: Vec<LetterInstance>) -> Self {
        Self { letters }
    }
}

impl<'a> IntoIterator for &'a LetterSequence {
    type Item = &'a LetterInstance;
    type IntoIter = std::slice::Iter<'a, LetterInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl IntoIterator for LetterSequence {
    type Item = LetterInstance;
    type IntoIter = std::vec::IntoIter<LetterInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterSequence;
    use crate::model::letter::LetterInstance;

    #[test]
    fn render_concatenates_in_order() {
        let sequence = LetterSequence::from(vec![
            LetterInstance::new('\u{05E9}'),
            LetterInstance::new('\u{05DC}'),
            LetterInstance::new('\u{05DD}'),
        ]);
        assert_eq!(sequence.render(), "\u{05E9}\u{05DC}\u{05DD}");
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut sequence = LetterSequence::from(vec![LetterInstance::new('a')]);
        assert!(sequence.remove(3).is_none());
        assert_eq!(sequence.remove(0), Some(LetterInstance::new('a')));
        assert!(sequence.is_empty());
    }
}

//! Letter instance: one rendered grapheme position.
//!
//! # Responsibility
//! - Hold a consonant plus at most one niqqud per group.
//! - Validate additions against the consonant and evict marks that stop
//!   applying when the consonant changes.
//! - Render the letter in canonical group order.
//!
//! # Invariants
//! - Every attached niqqud is applicable to the current consonant.
//! - At most one niqqud is attached per group.
//! - `applicable` always reflects the current consonant; it is recomputed on
//!   every consonant change.

use crate::model::catalog::{applicable_niqqud, niqqud_groups, GroupNiqqud};
use crate::model::niqqud::{Niqqud, NiqqudGroup};
use log::{debug, trace};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NiqqudResult<T> = Result<T, NiqqudError>;

/// Letter-level mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NiqqudError {
    /// The niqqud may not sit on the letter's consonant.
    InapplicableNiqqud {
        glyph: &'static str,
        consonant: Option<char>,
    },
}

impl Display for NiqqudError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InapplicableNiqqud { glyph, consonant } => {
                let code_points = glyph
                    .chars()
                    .map(|c| format!("U+{:04X}", c as u32))
                    .collect::<Vec<_>>()
                    .join(" ");
                match consonant {
                    Some(letter) => write!(
                        f,
                        "niqqud {code_points} is not applicable to letter U+{:04X}",
                        *letter as u32
                    ),
                    None => write!(f, "niqqud {code_points} is not applicable"),
                }
            }
        }
    }
}

impl Error for NiqqudError {}

/// A consonant (or nothing) with its attached niqqud.
///
/// A letter without a consonant is a standalone square that carries a niqqud
/// which could not attach to any letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterInstance {
    consonant: Option<char>,
    niqqud_by_groups: BTreeMap<NiqqudGroup, Niqqud>,
    applicable: Vec<GroupNiqqud>,
}

impl LetterInstance {
    /// Creates a letter with no niqqud attached.
    pub fn new(consonant: char) -> Self {
        Self::from_parts(Some(consonant))
    }

    /// Creates a standalone square with no consonant and no niqqud.
    pub fn standalone() -> Self {
        Self::from_parts(None)
    }

    /// Creates a letter and attaches `niqqud` in order.
    ///
    /// # Errors
    /// - Returns `InapplicableNiqqud` for the first seed that does not apply
    ///   to `consonant`.
    pub fn with_niqqud<'a>(
        consonant: Option<char>,
        niqqud: impl IntoIterator<Item = &'a Niqqud>,
    ) -> NiqqudResult<Self> {
        let mut letter = Self::from_parts(consonant);
        for seed in niqqud {
            letter.add_niqqud(seed)?;
        }
        Ok(letter)
    }

    fn from_parts(consonant: Option<char>) -> Self {
        Self {
            consonant,
            niqqud_by_groups: BTreeMap::new(),
            applicable: applicable_niqqud(consonant),
        }
    }

    pub fn consonant(&self) -> Option<char> {
        self.consonant
    }

    /// Returns whether this letter has no consonant.
    pub fn is_standalone(&self) -> bool {
        self.consonant.is_none()
    }

    /// Replaces the consonant and evicts every niqqud that no longer applies.
    ///
    /// Eviction is not an error; it is the normal outcome of reassigning the
    /// consonant.
    pub fn set_consonant(&mut self, consonant: Option<char>) {
        let before = self.niqqud_by_groups.len();
        self.niqqud_by_groups
            .retain(|_, niqqud| niqqud.is_applicable_to(consonant));
        let evicted = before - self.niqqud_by_groups.len();
        if evicted > 0 {
            debug!("event=niqqud_evicted module=letter status=ok count={evicted}");
        }

        self.consonant = consonant;
        self.regenerate_applicable();
    }

    /// Consonant followed by attached glyphs in canonical catalog group order.
    pub fn representation(&self) -> String {
        let mut result = String::new();
        if let Some(consonant) = self.consonant {
            result.push(consonant);
        }
        // Only catalog groups render; a niqqud in any other group stays
        // attached but contributes nothing.
        for group in niqqud_groups() {
            if let Some(niqqud) = self.niqqud_by_groups.get(group) {
                result.push_str(niqqud.glyph);
            }
        }
        result
    }

    /// Consonant followed by just `niqqud`, ignoring what is attached.
    ///
    /// This is what a selection keyboard shows on each key.
    pub fn preview_with(&self, niqqud: &Niqqud) -> String {
        let mut result = String::new();
        if let Some(consonant) = self.consonant {
            result.push(consonant);
        }
        result.push_str(niqqud.glyph);
        result
    }

    /// Groups with at least one niqqud applicable to the consonant, each with
    /// its applicable niqqud in catalog order.
    pub fn applicable_niqqud_by_groups(&self) -> &[GroupNiqqud] {
        &self.applicable
    }

    /// Attached niqqud in ascending group order.
    pub fn attached_niqqud(&self) -> impl Iterator<Item = &Niqqud> {
        self.niqqud_by_groups.values()
    }

    /// The niqqud attached for `group`, if any.
    pub fn niqqud_in_group(&self, group: NiqqudGroup) -> Option<&Niqqud> {
        self.niqqud_by_groups.get(&group)
    }

    /// Attaches `niqqud`, replacing any niqqud of the same group.
    ///
    /// # Errors
    /// - Returns `InapplicableNiqqud` when `niqqud` may not sit on the
    ///   consonant. The letter is left unchanged.
    pub fn add_niqqud(&mut self, niqqud: &Niqqud) -> NiqqudResult<()> {
        if !niqqud.is_applicable_to(self.consonant) {
            debug!(
                "event=niqqud_rejected module=letter status=error group={}",
                niqqud.group
            );
            return Err(NiqqudError::InapplicableNiqqud {
                glyph: niqqud.glyph,
                consonant: self.consonant,
            });
        }

        trace!("event=niqqud_added module=letter group={}", niqqud.group);
        self.niqqud_by_groups.insert(niqqud.group, niqqud.clone());
        Ok(())
    }

    /// Detaches `niqqud` if it is the one attached for its group.
    ///
    /// Returns whether anything was removed.
    pub fn remove_niqqud(&mut self, niqqud: &Niqqud) -> bool {
        if self.has_niqqud(niqqud) {
            self.niqqud_by_groups.remove(&niqqud.group);
            true
        } else {
            false
        }
    }

    /// Removes `niqqud` when attached, attaches it otherwise.
    ///
    /// # Errors
    /// - Propagates `InapplicableNiqqud` from the attach branch.
    pub fn toggle_niqqud(&mut self, niqqud: &Niqqud) -> NiqqudResult<()> {
        if !self.remove_niqqud(niqqud) {
            self.add_niqqud(niqqud)?;
        }
        Ok(())
    }

    /// Returns whether exactly `niqqud` is attached for its group.
    pub fn has_niqqud(&self, niqqud: &Niqqud) -> bool {
        self.niqqud_by_groups.get(&niqqud.group) == Some(niqqud)
    }

    fn regenerate_applicable(&mut self) {
        self.applicable = applicable_niqqud(self.consonant);
    }
}

impl Serialize for LetterInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let glyphs: Vec<&str> = self.attached_niqqud().map(|niqqud| niqqud.glyph).collect();
        let mut state = serializer.serialize_struct("LetterInstance", 3)?;
        state.serialize_field("consonant", &self.consonant)?;
        state.serialize_field("niqqud", &glyphs)?;
        state.serialize_field("representation", &self.representation())?;
        state.end()
    }
}

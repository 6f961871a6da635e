//! Niqqud text model.
//!
//! # Responsibility
//! - Define the diacritic catalog, the per-position letter model and the
//!   ordered letter sequence that UI interaction edits in place.
//!
//! # Invariants
//! - Catalog tables are immutable process-wide data.
//! - A letter never carries a niqqud that does not apply to its consonant,
//!   and never more than one niqqud per group.
//! - A sequence exclusively owns its letters; nothing else extends their
//!   lifetime.

pub mod catalog;
pub mod letter;
pub mod niqqud;
pub mod sequence;

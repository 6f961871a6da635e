//! Text ingestion.
//!
//! # Responsibility
//! - Expand legacy precomposed presentation forms.
//! - Scan text into a letter sequence without ever failing.

pub mod ligature;
pub mod text;

//! Editing use-cases.
//!
//! # Responsibility
//! - Wrap the letter model into the operations an interactive editor calls.
//! - Keep UI/FFI layers decoupled from letter-level invariants.

pub mod session;

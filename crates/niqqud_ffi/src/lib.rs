//! Flutter-facing bindings for the niqqud editor core.

pub mod api;

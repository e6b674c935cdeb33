//! Console input module (engine-facing).
//!
//! This crate is intentionally independent of any terminal library. It maps a
//! typed menu line into a [`crate::types::Command`] for the active
//! [`crate::types::Tier`], or reports [`InvalidCommand`].

pub mod map;

pub use tetris_stack_types as types;

pub use map::{parse_selection, selector_for, InvalidCommand, Selection};

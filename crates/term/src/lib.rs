//! Console rendering module.
//!
//! A small, line-oriented rendering layer for the menu-driven game. The view
//! turns engine snapshots and outcomes into [`TextFrame`]s (pure, testable) and
//! the renderer flushes them to a writer, styled through crossterm.
//!
//! Goals:
//! - Keep `core` free of any text or terminal concerns
//! - Keep every message testable without a terminal
//! - Allow plain output (no escape codes) for pipes and tests

pub mod frame;
pub mod renderer;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use frame::{Line, TextFrame, Tone};
pub use renderer::{encode_into, ConsoleRenderer};

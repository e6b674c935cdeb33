//! Tetris Stack (workspace facade crate).
//!
//! This package re-exports the workspace crates as `tetris_stack::{core,input,term,types}`
//! and adds the application layer: environment configuration, the JSONL session
//! log and the interactive menu session.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod config;
pub mod session;
pub mod session_log;

pub use config::AppConfig;
pub use session::{Session, SessionSummary};
pub use session_log::{LogRecord, SessionLog};

//! Core engine module - pure, deterministic, and testable
//!
//! This crate holds the next-piece pipeline: a circular queue of upcoming
//! pieces, a small reserve stack, the piece generator, and the command layer that
//! moves pieces between them. It has **zero dependencies** on terminal, input,
//! or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Transactional**: A failed command leaves every container untouched
//! - **Allocation-free**: Fixed arrays and `ArrayVec` on the command path
//!
//! # Module Structure
//!
//! - [`rng`]: LCG plus the uniform / bag piece generator
//! - [`queue`]: Fixed-capacity circular buffer that owns the id counter
//! - [`stack`]: Fixed-capacity reserve stack
//! - [`engine`]: Play, send-to-stack, use, swap, block swap and insert commands
//! - [`snapshot`]: Read-only state copy for rendering
//! - [`error`]: Container and command errors
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{Engine, OutcomeKind};
//! use tetris_stack_types::Command;
//!
//! let mut engine = Engine::new(12345);
//!
//! for _ in 0..3 {
//!     engine.execute(Command::SendToStack).unwrap();
//! }
//!
//! let snap = engine.snapshot();
//! assert_eq!(snap.stack_ids().collect::<Vec<_>>(), vec![2, 1, 0]);
//! assert_eq!(snap.queue_ids().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
//!
//! let outcome = engine.execute(Command::SwapBlock).unwrap();
//! assert_eq!(outcome.kind, OutcomeKind::SwappedBlock);
//! assert_eq!(engine.snapshot().queue_ids().collect::<Vec<_>>(), vec![0, 1, 2, 6, 7]);
//! ```

pub mod engine;
pub mod error;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, Outcome, OutcomeKind};
pub use error::{EngineError, QueueError, StackError};
pub use queue::PieceQueue;
pub use rng::{PieceRule, PieceSource, SimpleRng};
pub use snapshot::Snapshot;
pub use stack::ReserveStack;

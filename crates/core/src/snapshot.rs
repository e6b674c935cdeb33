use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of the engine state, for rendering and logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u32,
}

impl Snapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
    }

    pub fn queue_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.queue.iter().map(|p| p.id)
    }

    pub fn stack_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.stack.iter().map(|p| p.id)
    }
}

//! Queue module - fixed-capacity circular buffer of upcoming pieces
//!
//! The queue owns the piece id counter and the [`PieceSource`]: every piece it
//! enqueues is generated on the spot with the next id, so ids are never reused
//! even after pieces leave the queue.
//!
//! Storage is a fixed array of `Option<Piece>` plus `front`/`back` cursors and
//! a length. Slots outside the logical `[front, front + len)` window are `None`.

use crate::error::QueueError;
use crate::rng::PieceSource;
use crate::types::{Piece, BLOCK_SIZE};

#[derive(Debug, Clone)]
pub struct PieceQueue<const N: usize> {
    slots: [Option<Piece>; N],
    front: usize,
    back: usize,
    len: usize,
    /// Id handed to the next generated piece.
    next_id: u32,
    source: PieceSource,
}

impl<const N: usize> PieceQueue<N> {
    /// Empty queue drawing from `source`; ids start at 0.
    pub fn new(source: PieceSource) -> Self {
        Self {
            slots: [None; N],
            front: 0,
            back: 0,
            len: 0,
            next_id: 0,
            source,
        }
    }

    /// Queue filled to capacity with ids `0..N`.
    pub fn filled(source: PieceSource) -> Self {
        let mut queue = Self::new(source);
        while queue.enqueue().is_ok() {}
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Generate a piece at the back. No-op returning `Full` when full.
    pub fn enqueue(&mut self) -> Result<Piece, QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }

        let piece = self.source.next(self.next_id);
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % N;
        self.len += 1;
        self.next_id += 1;
        Ok(piece)
    }

    /// Remove the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        let piece = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % N;
        self.len -= 1;
        Ok(piece)
    }

    pub fn front(&self) -> Option<&Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Overwrite the front piece, returning the previous one.
    pub fn replace_front(&mut self, piece: Piece) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.front]
            .replace(piece)
            .ok_or(QueueError::Empty)
    }

    /// Overwrite the pieces at front, front+1, front+2 (in that order),
    /// returning the previous occupants in the same order.
    pub fn replace_front_block(
        &mut self,
        pieces: [Piece; BLOCK_SIZE],
    ) -> Result<[Piece; BLOCK_SIZE], QueueError> {
        if self.len < BLOCK_SIZE {
            return Err(QueueError::TooShallow);
        }

        let mut old = pieces;
        for (i, (new, out)) in pieces.iter().zip(old.iter_mut()).enumerate() {
            let slot = &mut self.slots[(self.front + i) % N];
            // Every slot inside the window is occupied.
            *out = slot.replace(*new).ok_or(QueueError::TooShallow)?;
        }
        Ok(old)
    }

    /// Front-to-back view. Lazy and read-only.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % N].as_ref())
    }
}

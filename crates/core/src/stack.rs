//! Reserve stack - fixed-capacity LIFO of pieces set aside from the queue.
//!
//! Backed by an `ArrayVec`, so the length doubles as the "empty" marker and the
//! stack never allocates.

use arrayvec::ArrayVec;

use crate::error::StackError;
use crate::types::{Piece, BLOCK_SIZE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveStack<const N: usize> {
    /// Base at index 0, top at `len - 1`.
    pieces: ArrayVec<Piece, N>,
}

impl<const N: usize> ReserveStack<N> {
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), StackError> {
        self.pieces.try_push(piece).map_err(|_| StackError::Full)
    }

    pub fn pop(&mut self) -> Result<Piece, StackError> {
        self.pieces.pop().ok_or(StackError::Empty)
    }

    pub fn peek_top(&self) -> Result<&Piece, StackError> {
        self.pieces.last().ok_or(StackError::Empty)
    }

    /// Overwrite the top piece, returning the previous one.
    pub fn replace_top(&mut self, piece: Piece) -> Result<Piece, StackError> {
        let top = self.pieces.last_mut().ok_or(StackError::Empty)?;
        Ok(std::mem::replace(top, piece))
    }

    /// Overwrite the three pieces nearest the top, addressed deepest first
    /// (`[top-2, top-1, top]`). Returns the previous occupants in the same order.
    pub fn replace_top_block(
        &mut self,
        pieces: [Piece; BLOCK_SIZE],
    ) -> Result<[Piece; BLOCK_SIZE], StackError> {
        let len = self.pieces.len();
        if len < BLOCK_SIZE {
            return Err(StackError::InsufficientDepth);
        }

        let block = &mut self.pieces[len - BLOCK_SIZE..];
        let mut old = pieces;
        old.copy_from_slice(block);
        block.copy_from_slice(&pieces);
        Ok(old)
    }

    /// Top-to-base view.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().rev()
    }
}

//! Engine module - the command layer over the queue and the reserve stack
//!
//! The engine is the sole owner of both containers and the only code that moves a
//! piece between them. Every command is all-or-nothing: preconditions are checked
//! up front, so a returned [`EngineError`] means nothing changed.

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::queue::PieceQueue;
use crate::rng::{PieceRule, PieceSource};
use crate::snapshot::Snapshot;
use crate::stack::ReserveStack;
use crate::types::*;

/// Which command succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Played,
    Sent,
    Used,
    Swapped,
    SwappedBlock,
    Inserted,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Played => "played",
            OutcomeKind::Sent => "sent",
            OutcomeKind::Used => "used",
            OutcomeKind::Swapped => "swapped",
            OutcomeKind::SwappedBlock => "swappedBlock",
            OutcomeKind::Inserted => "inserted",
        }
    }
}

/// Successful result of a command, with the pieces it touched.
///
/// Piece order per kind:
/// - `Played` / `Sent`: the removed piece, then the refill piece (auto refill only)
/// - `Used`: the popped piece
/// - `Swapped`: former queue front, former stack top
/// - `SwappedBlock`: former queue front three (front first), then former stack
///   block (deepest first)
/// - `Inserted`: the new piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub pieces: ArrayVec<Piece, MAX_OUTCOME_PIECES>,
}

impl Outcome {
    fn new(kind: OutcomeKind) -> Self {
        Self {
            kind,
            pieces: ArrayVec::new(),
        }
    }

    fn with(mut self, piece: Piece) -> Self {
        self.pieces.push(piece);
        self
    }

    fn with_opt(self, piece: Option<Piece>) -> Self {
        match piece {
            Some(p) => self.with(p),
            None => self,
        }
    }

    /// The piece leaving play (played, sent or used), if any.
    pub fn primary(&self) -> Option<Piece> {
        self.pieces.first().copied()
    }
}

/// Queue + reserve stack with the five player commands and manual insert.
#[derive(Debug, Clone)]
pub struct Engine {
    queue: PieceQueue<QUEUE_CAPACITY>,
    stack: ReserveStack<STACK_CAPACITY>,
    refill: RefillPolicy,
    seed: u32,
}

impl Engine {
    /// Engine with a uniform source and automatic refill.
    pub fn new(seed: u32) -> Self {
        Self::with_options(seed, PieceRule::Uniform, RefillPolicy::Auto)
    }

    pub fn with_options(seed: u32, rule: PieceRule, refill: RefillPolicy) -> Self {
        Self {
            queue: PieceQueue::filled(PieceSource::with_rule(seed, rule)),
            stack: ReserveStack::new(),
            refill,
            seed,
        }
    }

    /// Engine for a tier: its refill policy, the given rule.
    pub fn for_tier(seed: u32, rule: PieceRule, tier: Tier) -> Self {
        Self::with_options(seed, rule, tier.refill())
    }

    pub fn queue(&self) -> &PieceQueue<QUEUE_CAPACITY> {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack<STACK_CAPACITY> {
        &self.stack
    }

    pub fn refill_policy(&self) -> RefillPolicy {
        self.refill
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, EngineError> {
        match command {
            Command::Play => self.play(),
            Command::SendToStack => self.send_to_stack(),
            Command::UseReserved => self.use_reserved(),
            Command::SwapTop => self.swap_top(),
            Command::SwapBlock => self.swap_block(),
            Command::Insert => self.insert(),
        }
    }

    /// Remove the queue front and hand it out.
    pub fn play(&mut self) -> Result<Outcome, EngineError> {
        let played = self.queue.dequeue()?;
        let refilled = self.refill_after_removal();
        Ok(Outcome::new(OutcomeKind::Played)
            .with(played)
            .with_opt(refilled))
    }

    /// Move the queue front onto the reserve stack.
    pub fn send_to_stack(&mut self) -> Result<Outcome, EngineError> {
        if self.queue.is_empty() {
            return Err(EngineError::EmptyQueue);
        }
        if self.stack.is_full() {
            return Err(EngineError::StackFull);
        }

        let sent = self.queue.dequeue()?;
        self.stack.push(sent)?;
        let refilled = self.refill_after_removal();
        Ok(Outcome::new(OutcomeKind::Sent).with(sent).with_opt(refilled))
    }

    /// Pop the reserve stack top and hand it out. The queue is untouched.
    pub fn use_reserved(&mut self) -> Result<Outcome, EngineError> {
        let used = self.stack.pop()?;
        Ok(Outcome::new(OutcomeKind::Used).with(used))
    }

    /// Exchange queue front and stack top in place.
    pub fn swap_top(&mut self) -> Result<Outcome, EngineError> {
        let Some(&queue_front) = self.queue.front() else {
            return Err(EngineError::EmptyQueue);
        };
        let stack_top = *self.stack.peek_top()?;

        self.queue.replace_front(stack_top)?;
        self.stack.replace_top(queue_front)?;
        Ok(Outcome::new(OutcomeKind::Swapped)
            .with(queue_front)
            .with(stack_top))
    }

    /// Exchange the three front queue pieces with the three top stack pieces.
    ///
    /// The deepest stack piece of the block lands at the queue front, and the
    /// queue front lands deepest in the stack: queue `[A, B, C]` with stack
    /// (top to base) `[X, Y, Z]` becomes queue `[Z, Y, X]`, stack `[C, B, A]`.
    pub fn swap_block(&mut self) -> Result<Outcome, EngineError> {
        if self.queue.len() < BLOCK_SIZE {
            return Err(EngineError::InsufficientQueueDepth);
        }
        if self.stack.len() < BLOCK_SIZE {
            return Err(EngineError::InsufficientStackDepth);
        }

        let queue_block: [Piece; BLOCK_SIZE] = self
            .queue
            .iter()
            .take(BLOCK_SIZE)
            .copied()
            .collect::<ArrayVec<Piece, BLOCK_SIZE>>()
            .into_inner()
            .map_err(|_| EngineError::InsufficientQueueDepth)?;
        let stack_block = self.stack.replace_top_block(queue_block)?;
        self.queue.replace_front_block(stack_block)?;

        let mut outcome = Outcome::new(OutcomeKind::SwappedBlock);
        outcome.pieces.extend(queue_block);
        outcome.pieces.extend(stack_block);
        Ok(outcome)
    }

    /// Append one generated piece to the queue.
    pub fn insert(&mut self) -> Result<Outcome, EngineError> {
        let inserted = self.queue.enqueue()?;
        Ok(Outcome::new(OutcomeKind::Inserted).with(inserted))
    }

    fn refill_after_removal(&mut self) -> Option<Piece> {
        match self.refill {
            // A slot was just freed, so this cannot report Full.
            RefillPolicy::Auto => self.queue.enqueue().ok(),
            RefillPolicy::Manual => None,
        }
    }

    /// Copy the visible state into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.stack.extend(self.stack.iter_top_down().copied());
        out.next_id = self.queue.next_id();
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut out = Snapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

//! RNG module - piece generation
//!
//! `PieceSource` deals piece kinds from the four-letter alphabet, either
//! uniformly at random (the default) or from shuffled bags of four.
//! Ids are supplied by the caller so that uniqueness stays with the queue that
//! owns the counter.
//!
//! Also provides a simple LCG so a seed fully determines the deal.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Kind-selection rule used by [`PieceSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceRule {
    /// Every draw is independent and uniform over the alphabet
    #[default]
    Uniform,
    /// Kinds are dealt from shuffled bags holding one of each
    Bag,
}

impl PieceRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(PieceRule::Uniform),
            "bag" | "4bag" => Some(PieceRule::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceRule::Uniform => "uniform",
            PieceRule::Bag => "bag",
        }
    }
}

const BAG_LEN: usize = PieceKind::ALL.len();

/// Piece generator
#[derive(Debug, Clone)]
pub struct PieceSource {
    rule: PieceRule,
    rng: SimpleRng,
    /// Current bag (only used by [`PieceRule::Bag`])
    bag: [PieceKind; BAG_LEN],
    /// Index into current bag
    bag_index: usize,
}

impl PieceSource {
    /// Uniform source with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rule(seed, PieceRule::Uniform)
    }

    pub fn with_rule(seed: u32, rule: PieceRule) -> Self {
        Self {
            rule,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            // Force a shuffle on the first bag draw.
            bag_index: BAG_LEN,
        }
    }

    pub fn rule(&self) -> PieceRule {
        self.rule
    }

    /// Generate the piece carrying `id`. Never fails.
    pub fn next(&mut self, id: u32) -> Piece {
        Piece::new(self.draw_kind(), id)
    }

    fn draw_kind(&mut self) -> PieceKind {
        match self.rule {
            PieceRule::Uniform => {
                PieceKind::ALL[self.rng.next_range(BAG_LEN as u32) as usize]
            }
            PieceRule::Bag => {
                if self.bag_index >= BAG_LEN {
                    self.refill_bag();
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

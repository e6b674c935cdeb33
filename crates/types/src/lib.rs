//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core engine, console rendering, input mapping).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `STACK_CAPACITY` | 3 | Pieces the reserve stack can hold |
//! | `BLOCK_SIZE` | 3 | Pieces exchanged by a block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Command, Piece, PieceKind, Tier, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 3);
//! assert_eq!(piece.to_string(), "[T 3]");
//!
//! assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
//! assert_eq!(Command::from_str("swapBlock"), Some(Command::SwapBlock));
//! assert_eq!(Tier::from_str("NOVICE"), Some(Tier::Novice));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of slots in the upcoming-piece queue
pub const QUEUE_CAPACITY: usize = 5;

/// Number of slots in the reserve stack
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces moved by a block swap on each side
pub const BLOCK_SIZE: usize = 3;

/// Upper bound on pieces reported by a single command outcome
/// (a block swap reports both sides).
pub const MAX_OUTCOME_PIECES: usize = BLOCK_SIZE * 2;

const _: () = assert!(BLOCK_SIZE <= QUEUE_CAPACITY && BLOCK_SIZE <= STACK_CAPACITY);


/// The four piece kinds dealt by the generator
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter used on screen and in logs
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A generated piece: a kind plus a process-unique id
///
/// Pieces are `Copy` values. They move between the queue and the reserve
/// stack but are never modified after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Commands understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Remove the queue front and hand it to the player
    Play,
    /// Move the queue front onto the reserve stack
    SendToStack,
    /// Pop the reserve stack top and hand it to the player
    UseReserved,
    /// Exchange queue front with stack top
    SwapTop,
    /// Exchange the three front queue pieces with the three top stack pieces
    SwapBlock,
    /// Append one freshly generated piece to the queue (manual refill)
    Insert,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Play,
        Command::SendToStack,
        Command::UseReserved,
        Command::SwapTop,
        Command::SwapBlock,
        Command::Insert,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(Command::Play),
            "sendtostack" => Some(Command::SendToStack),
            "usereserved" => Some(Command::UseReserved),
            "swaptop" => Some(Command::SwapTop),
            "swapblock" => Some(Command::SwapBlock),
            "insert" => Some(Command::Insert),
            _ => None,
        }
    }

    /// camelCase name, used in the session log
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::SendToStack => "sendToStack",
            Command::UseReserved => "useReserved",
            Command::SwapTop => "swapTop",
            Command::SwapBlock => "swapBlock",
            Command::Insert => "insert",
        }
    }
}

/// How the queue regains a slot freed by Play or SendToStack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefillPolicy {
    /// The engine enqueues one piece right after every removal
    #[default]
    Auto,
    /// Removals leave a gap until the player issues [`Command::Insert`]
    Manual,
}

/// Difficulty tiers of the console game
///
/// Each tier exposes a subset of [`Command`] and a refill policy:
///
/// | Tier | Commands | Refill |
/// |------|----------|--------|
/// | Novice | play, insert | manual |
/// | Adventurer | play, sendToStack, useReserved | auto |
/// | Master | play, sendToStack, useReserved, swapTop, swapBlock | auto |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    Novice,
    Adventurer,
    #[default]
    Master,
}

impl Tier {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "novato" => Some(Tier::Novice),
            "adventurer" | "aventureiro" => Some(Tier::Adventurer),
            "master" | "mestre" => Some(Tier::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Novice => "novice",
            Tier::Adventurer => "adventurer",
            Tier::Master => "master",
        }
    }

    /// Commands offered by this tier, in menu order (selector 1 is the first entry)
    pub fn commands(&self) -> &'static [Command] {
        match self {
            Tier::Novice => &[Command::Play, Command::Insert],
            Tier::Adventurer => &[Command::Play, Command::SendToStack, Command::UseReserved],
            Tier::Master => &[
                Command::Play,
                Command::SendToStack,
                Command::UseReserved,
                Command::SwapTop,
                Command::SwapBlock,
            ],
        }
    }

    pub fn offers(&self, command: Command) -> bool {
        self.commands().contains(&command)
    }

    pub fn refill(&self) -> RefillPolicy {
        match self {
            Tier::Novice => RefillPolicy::Manual,
            Tier::Adventurer | Tier::Master => RefillPolicy::Auto,
        }
    }

    /// Whether the reserve stack is part of this tier's game
    pub fn uses_stack(&self) -> bool {
        !matches!(self, Tier::Novice)
    }
}

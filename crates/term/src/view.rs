//! Console view: maps engine snapshots and outcomes into text frames.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::{EngineError, Outcome, OutcomeKind, Snapshot};
use crate::frame::{TextFrame, Tone};
use crate::types::{Command, Piece, Tier};

const RULE: &str = "========================================";

/// Menu label for a command.
pub fn command_label(command: Command) -> &'static str {
    match command {
        Command::Play => "Play the front piece",
        Command::SendToStack => "Send the front piece to the reserve",
        Command::UseReserved => "Use the reserved piece",
        Command::SwapTop => "Swap queue front with reserve top",
        Command::SwapBlock => "Swap 3 queue pieces with 3 reserve pieces",
        Command::Insert => "Insert a new piece",
    }
}

fn piece_row<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{piece}");
    }
    if out.is_empty() {
        out.push_str("[EMPTY]");
    }
    out
}

pub fn greeting(tier: Tier) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.push(Tone::Title, RULE);
    frame.push(Tone::Title, "  WELCOME TO TETRIS STACK!");
    frame.push(
        Tone::Title,
        match tier {
            Tier::Novice => "  Circular piece queue",
            Tier::Adventurer => "  Piece queue + reserve stack",
            Tier::Master => "  Piece queue + reserve stack, with swaps",
        },
    );
    frame.push(Tone::Title, RULE);
    frame
}

pub fn farewell() -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    frame.push(Tone::Title, "Thanks for playing Tetris Stack!");
    frame.blank();
    frame
}

/// Queue front-to-back and, for tiers with a reserve, the stack top-to-base.
pub fn state(snap: &Snapshot, tier: Tier) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    frame.push(Tone::Plain, RULE);
    frame.push(Tone::Plain, "CURRENT STATE");
    frame.push(Tone::Plain, RULE);
    frame.push(
        Tone::Accent,
        format!("Piece queue: {}", piece_row(snap.queue.iter())),
    );
    if tier.uses_stack() {
        frame.push(
            Tone::Accent,
            format!("Reserve (top -> base): {}", piece_row(snap.stack.iter())),
        );
    }
    frame.push(Tone::Plain, RULE);
    frame
}

/// Printed after the menu, without a line break.
pub const PROMPT: &str = "Choose an option: ";

/// Numbered menu for `tier`.
pub fn menu(tier: Tier) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    frame.push(
        Tone::Title,
        format!("TETRIS STACK - {} MENU", tier.as_str().to_uppercase()),
    );
    for (i, &command) in tier.commands().iter().enumerate() {
        frame.push(Tone::Plain, format!(" {} - {}", i + 1, command_label(command)));
    }
    frame.push(Tone::Plain, " 0 - Quit");
    frame
}

pub fn outcome(outcome: &Outcome) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    let p = &outcome.pieces;
    match outcome.kind {
        OutcomeKind::Played | OutcomeKind::Sent => {
            if let Some(first) = p.first() {
                let verb = if outcome.kind == OutcomeKind::Played {
                    "played"
                } else {
                    "sent to the reserve"
                };
                frame.push(Tone::Success, format!("Piece {first} {verb}."));
            }
            if let Some(refill) = p.get(1) {
                frame.push(Tone::Success, format!("New piece {refill} added to the queue."));
            }
        }
        OutcomeKind::Used => {
            if let Some(first) = p.first() {
                frame.push(Tone::Success, format!("Reserved piece {first} used."));
            }
        }
        OutcomeKind::Swapped => {
            frame.push(Tone::Success, "Swap done.");
            if let (Some(q), Some(s)) = (p.first(), p.get(1)) {
                frame.push(Tone::Success, format!("  queue {q} <-> reserve {s}"));
            }
        }
        OutcomeKind::SwappedBlock => {
            frame.push(Tone::Success, "Block swap done.");
            let half = p.len() / 2;
            frame.push(
                Tone::Success,
                format!(
                    "  queue {} <-> reserve {}",
                    piece_row(p[..half].iter()),
                    piece_row(p[half..].iter())
                ),
            );
        }
        OutcomeKind::Inserted => {
            if let Some(first) = p.first() {
                frame.push(Tone::Success, format!("New piece {first} inserted."));
            }
        }
    }
    frame
}

pub fn engine_error(err: EngineError) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    frame.push(Tone::Error, format!("Error: {err}."));
    frame
}

pub fn invalid_input(err: &dyn std::error::Error) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.blank();
    frame.push(Tone::Error, format!("Error: {err}."));
    frame
}

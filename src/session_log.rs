//! Append-only JSONL log of executed commands.
//!
//! One JSON object per line. Write failures disable the log for the rest of the
//! session; they never interrupt the game.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::core::{EngineError, Outcome, Snapshot};
use crate::types::{Command, Piece, Tier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub seq: u64,
    pub tier: &'static str,
    pub command: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub pieces: Vec<String>,
    pub queue: Vec<String>,
    pub stack: Vec<String>,
}

fn piece_tag(piece: &Piece) -> String {
    format!("{}{}", piece.kind.as_char(), piece.id)
}

impl LogRecord {
    pub fn new(
        seq: u64,
        tier: Tier,
        command: Command,
        result: &Result<Outcome, EngineError>,
        after: &Snapshot,
    ) -> Self {
        let (outcome, error, pieces) = match result {
            Ok(o) => (
                Some(o.kind.as_str()),
                None,
                o.pieces.iter().map(piece_tag).collect(),
            ),
            Err(e) => (None, Some(e.code()), Vec::new()),
        };

        Self {
            seq,
            tier: tier.as_str(),
            command: command.as_str(),
            ok: result.is_ok(),
            outcome,
            error,
            pieces,
            queue: after.queue.iter().map(piece_tag).collect(),
            stack: after.stack.iter().map(piece_tag).collect(),
        }
    }
}

pub struct SessionLog {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl SessionLog {
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    pub fn with_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(512),
        }
    }

    /// Open `path` for appending. A file that cannot be opened leaves the log
    /// disabled and is reported on stderr.
    pub fn open(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::with_writer(BufWriter::new(file)),
            Err(e) => {
                eprintln!("[tetris-stack] session log {path} disabled: {e}");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, rec: &LogRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = sink.write_all(&self.buf).and_then(|_| sink.flush()) {
            eprintln!("[tetris-stack] session log write failed, disabling: {e}");
            self.sink = None;
        }
    }
}

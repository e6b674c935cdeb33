//! Interactive session: the menu loop between the console and the engine.
//!
//! The loop is generic over its reader and writer so integration tests can drive a
//! whole game with scripted input.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{Engine, EngineError, Outcome, Snapshot};
use crate::input::{parse_selection, Selection};
use crate::session_log::{LogRecord, SessionLog};
use crate::term::{view, ConsoleRenderer};
use crate::types::{Command, Tier};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: u64,
    pub failures: u64,
    pub invalid_inputs: u64,
}

pub struct Session {
    engine: Engine,
    tier: Tier,
    log: SessionLog,
    snapshot: Snapshot,
    summary: SessionSummary,
}

impl Session {
    pub fn new(engine: Engine, tier: Tier, log: SessionLog) -> Self {
        Self {
            engine,
            tier,
            log,
            snapshot: Snapshot::default(),
            summary: SessionSummary::default(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Execute one command and log it.
    pub fn step(&mut self, command: Command) -> Result<Outcome, EngineError> {
        let result = self.engine.execute(command);

        self.summary.commands += 1;
        if result.is_err() {
            self.summary.failures += 1;
        }

        self.engine.snapshot_into(&mut self.snapshot);
        let rec = LogRecord::new(
            self.summary.commands,
            self.tier,
            command,
            &result,
            &self.snapshot,
        );
        self.log.record(&rec);
        result
    }

    /// Run until the player quits or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        renderer: &mut ConsoleRenderer<W>,
    ) -> Result<SessionSummary> {
        renderer.draw(&view::greeting(self.tier))?;
        self.draw_state(renderer)?;

        let mut line = String::new();
        loop {
            renderer.draw(&view::menu(self.tier))?;
            renderer.prompt(view::PROMPT)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like quitting.
                break;
            }

            match parse_selection(&line, self.tier) {
                Ok(Selection::Quit) => break,
                Ok(Selection::Run(command)) => {
                    let frame = match self.step(command) {
                        Ok(outcome) => view::outcome(&outcome),
                        Err(err) => view::engine_error(err),
                    };
                    renderer.draw(&frame)?;
                    self.draw_state(renderer)?;
                }
                Err(err) => {
                    self.summary.invalid_inputs += 1;
                    renderer.draw(&view::invalid_input(&err))?;
                }
            }
        }

        renderer.draw(&view::farewell())?;
        Ok(self.summary)
    }

    fn draw_state<W: Write>(&mut self, renderer: &mut ConsoleRenderer<W>) -> Result<()> {
        self.engine.snapshot_into(&mut self.snapshot);
        renderer.draw(&view::state(&self.snapshot, self.tier))
    }
}

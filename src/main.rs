//! Console Tetris Stack runner (default binary).
//!
//! Reads menu choices from stdin and prints the queue and reserve after each
//! command. Configuration comes from `TETRIS_STACK_*` environment variables.

use std::io;

use anyhow::Result;

use tetris_stack::core::Engine;
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::{AppConfig, Session, SessionLog};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let seed = config.resolve_seed();
    eprintln!(
        "[tetris-stack] tier={} rule={} seed={}",
        config.tier.as_str(),
        config.rule.as_str(),
        seed
    );

    let log = match config.log_path.as_deref() {
        Some(path) => SessionLog::open(path),
        None => SessionLog::disabled(),
    };

    let engine = Engine::for_tier(seed, config.rule, config.tier);
    let mut session = Session::new(engine, config.tier, log);
    let mut renderer = ConsoleRenderer::stdout(config.color);

    let summary = session.run(io::stdin().lock(), &mut renderer)?;
    eprintln!(
        "[tetris-stack] commands={} failures={} invalid_inputs={}",
        summary.commands, summary.failures, summary.invalid_inputs
    );
    Ok(())
}

//! Menu selector mapping from a typed line to an engine command.

use std::{error::Error, fmt::Display};

use crate::types::{Command, Tier};

/// What the player picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    Run(Command),
}

/// The typed text is not a selector offered by the current tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCommand {
    pub input: String,
}

impl Display for InvalidCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid option {:?}, try again", self.input)
    }
}

impl Error for InvalidCommand {}

/// Selector number shown in the menu for `command`, if the tier offers it.
///
/// `0` is reserved for quitting; commands are numbered from 1 in tier order.
pub fn selector_for(tier: Tier, command: Command) -> Option<u8> {
    tier.commands()
        .iter()
        .position(|&c| c == command)
        .map(|i| i as u8 + 1)
}

/// Map one input line to a selection for `tier`.
///
/// Surrounding whitespace is ignored. `q` / `quit` are accepted alongside `0`.
pub fn parse_selection(line: &str, tier: Tier) -> Result<Selection, InvalidCommand> {
    let trimmed = line.trim();
    let invalid = || InvalidCommand {
        input: trimmed.to_string(),
    };

    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Selection::Quit);
    }

    let selector: usize = trimmed.parse().map_err(|_| invalid())?;
    if selector == 0 {
        return Ok(Selection::Quit);
    }

    tier.commands()
        .get(selector - 1)
        .map(|&c| Selection::Run(c))
        .ok_or_else(invalid)
}

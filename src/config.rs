//! Application configuration, read from environment variables.
//!
//! - `TETRIS_STACK_TIER`: `novice` | `adventurer` | `master` (default: master)
//! - `TETRIS_STACK_SEED`: fixed `u32` seed (default: derived from the clock)
//! - `TETRIS_STACK_RULE`: `uniform` | `bag` (default: uniform)
//! - `TETRIS_STACK_LOG_PATH`: JSONL session log path (default: disabled)
//! - `TETRIS_STACK_NO_COLOR`: `1` or `true` disables styling
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::PieceRule;
use crate::types::Tier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tier: Tier,
    pub seed: Option<u32>,
    pub rule: PieceRule,
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tier: Tier::Master,
            seed: None,
            rule: PieceRule::Uniform,
            log_path: None,
            color: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tier = lookup("TETRIS_STACK_TIER")
            .and_then(|s| Tier::from_str(&s))
            .unwrap_or_default();

        let seed = lookup("TETRIS_STACK_SEED").and_then(|s| s.trim().parse().ok());

        let rule = lookup("TETRIS_STACK_RULE")
            .and_then(|s| PieceRule::from_str(&s))
            .unwrap_or_default();

        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let color = !lookup("TETRIS_STACK_NO_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            tier,
            seed,
            rule,
            log_path,
            color,
        }
    }

    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TETRIS_STACK_TIER", "novice"),
            ("TETRIS_STACK_SEED", " 42 "),
            ("TETRIS_STACK_RULE", "bag"),
            ("TETRIS_STACK_LOG_PATH", "/tmp/stack.jsonl"),
            ("TETRIS_STACK_NO_COLOR", "TRUE"),
        ]));
        assert_eq!(config.tier, Tier::Novice);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rule, PieceRule::Bag);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/stack.jsonl"));
        assert!(!config.color);
        assert_eq!(config.resolve_seed(), 42);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TETRIS_STACK_TIER", "grandmaster"),
            ("TETRIS_STACK_SEED", "-3"),
            ("TETRIS_STACK_RULE", "weighted"),
            ("TETRIS_STACK_LOG_PATH", "   "),
            ("TETRIS_STACK_NO_COLOR", "0"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}

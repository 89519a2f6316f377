//! Driver configuration from environment variables

use std::env;

use crate::core::EngineConfig;

pub const ENV_SIDE: &str = "COLOR_LINES_SIDE";
pub const ENV_NEXT: &str = "COLOR_LINES_NEXT";
pub const ENV_PALETTE: &str = "COLOR_LINES_PALETTE";
pub const ENV_GOAL: &str = "COLOR_LINES_GOAL";
pub const ENV_SEED: &str = "COLOR_LINES_SEED";

/// Rules for new sessions plus the seed their RNGs derive from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    pub engine: EngineConfig,
    pub seed: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::classic(),
            seed: 1,
        }
    }
}

impl AdapterConfig {
    /// Create from `COLOR_LINES_*` environment variables.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AdapterConfig::from_env`] with a caller-supplied variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
            raw.and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        let mut engine = match parse::<usize>(lookup(ENV_SIDE)) {
            Some(side) => EngineConfig::with_side(side),
            None => defaults.engine,
        };
        if let Some(len) = parse(lookup(ENV_NEXT)) {
            engine.next_block_len = len;
        }
        if let Some(size) = parse(lookup(ENV_PALETTE)) {
            engine.palette_size = size;
        }
        if let Some(goal) = parse(lookup(ENV_GOAL)) {
            engine.line_goal = goal;
        }
        let seed = parse(lookup(ENV_SEED)).unwrap_or(defaults.seed);

        Self { engine, seed }
    }
}

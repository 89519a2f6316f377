//! Error types for the engine.
//!
//! Only contract violations and resource exhaustion are errors. Illegal but
//! expected player actions are reported as [`crate::types::TapOutcome`] values.

use thiserror::Error;

/// Grid access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell index {index} is out of range for a grid of {len} cells")]
    OutOfRange { index: usize, len: usize },
    #[error("malformed grid: {0}")]
    Malformed(String),
}

/// Failure to place a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no empty cell left to drop a piece on")]
    BoardFull,
}

/// Rejected [`crate::EngineConfig`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid side must be at least 2, got {0}")]
    SideTooSmall(usize),
    #[error("grid side must be at most {max}, got {side}")]
    SideTooLarge { side: usize, max: usize },
    #[error("line goal must lie in 2..={side}, got {goal}")]
    LineGoal { goal: usize, side: usize },
    #[error("palette size must lie in 1..={max}, got {size}")]
    PaletteSize { size: usize, max: usize },
    #[error("next block length must lie in 1..={max} and leave an empty cell, got {len}")]
    NextBlockLen { len: usize, max: usize },
}

/// Errors surfaced by [`crate::GameEngine`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cell index {index} is out of range for a grid of {len} cells")]
    OutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Grid(GridError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfRange { index, len } => EngineError::OutOfRange { index, len },
            other => EngineError::Grid(other),
        }
    }
}

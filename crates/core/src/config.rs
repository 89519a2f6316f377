//! Construction-time rule parameters.

use crate::error::ConfigError;
use crate::types::{
    Color, DEFAULT_LINE_GOAL, DEFAULT_NEXT_BLOCK_LEN, DEFAULT_PALETTE_SIZE, DEFAULT_SIDE,
    MAX_NEXT_BLOCK_LEN, MAX_SIDE,
};

/// Rule parameters of one game: grid side N, next-block size M, palette size K
/// and line goal G. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    pub side: usize,
    pub next_block_len: usize,
    pub palette_size: usize,
    pub line_goal: usize,
}

impl EngineConfig {
    /// Reference rules: 8x8 grid, 3 pieces per drop, 6 colors, lines of 5
    pub const fn classic() -> Self {
        Self {
            side: DEFAULT_SIDE,
            next_block_len: DEFAULT_NEXT_BLOCK_LEN,
            palette_size: DEFAULT_PALETTE_SIZE,
            line_goal: DEFAULT_LINE_GOAL,
        }
    }

    /// Same rules on a grid of a different side length.
    ///
    /// The line goal is clamped to the side so small grids stay playable.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            line_goal: DEFAULT_LINE_GOAL.min(side),
            ..Self::classic()
        }
    }

    /// Total number of cells (N²), `None` on overflow
    pub fn cell_count(&self) -> Option<usize> {
        self.side.checked_mul(self.side)
    }

    /// Check every parameter against the rule bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side < 2 {
            return Err(ConfigError::SideTooSmall(self.side));
        }
        let cells = match self.cell_count() {
            Some(cells) if self.side <= MAX_SIDE => cells,
            _ => {
                return Err(ConfigError::SideTooLarge {
                    side: self.side,
                    max: MAX_SIDE,
                })
            }
        };
        if self.line_goal < 2 || self.line_goal > self.side {
            return Err(ConfigError::LineGoal {
                goal: self.line_goal,
                side: self.side,
            });
        }
        if self.palette_size == 0 || self.palette_size > Color::PALETTE.len() {
            return Err(ConfigError::PaletteSize {
                size: self.palette_size,
                max: Color::PALETTE.len(),
            });
        }
        if self.next_block_len == 0
            || self.next_block_len > MAX_NEXT_BLOCK_LEN
            || self.next_block_len >= cells
        {
            return Err(ConfigError::NextBlockLen {
                len: self.next_block_len,
                max: MAX_NEXT_BLOCK_LEN,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic()
    }
}

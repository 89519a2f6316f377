//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for a
//! color-lines grid puzzle. It has **no dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Can run in any host (terminal, GUI, headless driver)
//!
//! # Module Structure
//!
//! - [`grid`]: NxN playfield of colored cells
//! - [`path`]: flood-fill move legality through empty cells
//! - [`lines`]: four-axis line detection and clearing around a pivot
//! - [`spawner`]: next-block generation and uniform random drops
//! - [`scoring`]: points per clear, final verdict and status text
//! - [`game_state`]: the turn and game life cycle
//! - [`snapshot`]: owned read-only view for presentation layers
//!
//! # Game Rules
//!
//! - Tap a piece to select it, then tap an empty cell to move it there
//! - A move is legal only if an orthogonal path of empty cells connects them
//! - A run of `line_goal` or more same-colored pieces through the moved piece,
//!   in any of the four directions, vanishes and scores
//! - A move that clears nothing drops the queued next block onto random empty
//!   cells; drops may clear lines too
//! - The game ends when the grid is full
//!
//! # Example
//!
//! ```
//! use color_lines_core::{EngineConfig, GameEngine};
//! use color_lines_types::{Phase, TapOutcome};
//!
//! let mut game = GameEngine::new(EngineConfig::classic(), 12345).unwrap();
//! assert_eq!(game.start(), TapOutcome::Started);
//!
//! // Three pieces are on the board; pick one up.
//! let piece = game.grid().cells().iter().position(|c| !c.is_empty()).unwrap();
//! assert_eq!(game.tap(piece), Ok(TapOutcome::Selected { index: piece }));
//! assert_eq!(game.phase(), Phase::PieceSelected);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod lines;
pub mod path;
pub mod scoring;
pub mod snapshot;
pub mod spawner;

pub use color_lines_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, GridError, SpawnError};
pub use game_state::GameEngine;
pub use grid::Grid;
pub use lines::{Axis, LineClear, LineScanner};
pub use path::PathFinder;
pub use scoring::{line_points, status_text, verdict};
pub use snapshot::GameSnapshot;
pub use spawner::{drop_one, next_block, seeded_rng, GameRng, NextBlock};

//! Adapter module - headless control over a line-delimited JSON protocol
//!
//! This module lets an external program (a test harness, a bot, a GUI shell in
//! another process) drive any number of named game sessions through
//! stdin/stdout, one JSON object per line.
//!
//! # Message Types
//!
//! ## Client → Driver
//!
//! - **start**: create the session if needed and begin a new game
//! - **tap**: phase-dispatched tap on a cell (`index`)
//! - **select** / **target**: explicit selection / target taps
//! - **observe**: request the current state without acting
//! - **close**: drop the session
//!
//! ## Driver → Client
//!
//! - **observation**: full session state after the command
//! - **closed**: the session is gone
//! - **error**: `invalid_command`, `out_of_range` or `unknown_session`
//!
//! # Environment Variables
//!
//! - `COLOR_LINES_SIDE`: grid side (default: 8)
//! - `COLOR_LINES_NEXT`: pieces dropped per turn (default: 3)
//! - `COLOR_LINES_PALETTE`: number of colors in play (default: 6)
//! - `COLOR_LINES_GOAL`: minimum line length (default: 5)
//! - `COLOR_LINES_SEED`: base RNG seed for new sessions (default: 1)
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Driver: {"type":"start","session":"a"}
//! Driver -> Client: {"type":"observation","seq":1,"session":"a","side":8,"cells":[0,0,3,...],...,"status":"Go!"}
//! Client -> Driver: {"type":"tap","session":"a","index":2}
//! Driver -> Client: {"type":"observation","seq":2,...,"selection":2,"phase":"piece_selected",...}
//! Client -> Driver: {"type":"tap","session":"a","index":99}
//! Driver -> Client: {"type":"error","seq":3,"code":"out_of_range","message":"..."}
//! ```
//!
//! # Implementation
//!
//! - See [`protocol`] for message structure definitions
//! - See [`sessions`] for the per-session locking
//! - See [`runtime`] for the tokio line pump

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod sessions;

pub use color_lines_core as core;
pub use color_lines_types as types;

pub use config::AdapterConfig;
pub use runtime::{run, run_stdio, Driver};
pub use sessions::SessionRegistry;

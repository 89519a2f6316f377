//! Color Lines (workspace facade crate).
//!
//! Re-exports the engine crates under `color_lines::{core,adapter,types}` and
//! hosts the command-line front end used by the `color-lines` binary.

pub mod cli;

pub use color_lines_adapter as adapter;
pub use color_lines_core as core;
pub use color_lines_types as types;

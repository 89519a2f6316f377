//! Color Lines runner (default binary).
//!
//! Text mode by default: a prompt on stdin/stdout printing the grid after
//! every command. `--json` serves the headless JSON driver instead.
//! Logs go to stderr (`RUST_LOG`, default `warn`) so stdout stays clean.

use std::io;

use anyhow::Result;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use color_lines::adapter::{run_stdio, AdapterConfig};
use color_lines::cli::{parse_args, run_text, Mode};
use color_lines::core::GameEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let config = cli.apply(AdapterConfig::from_env());
    config.engine.validate()?;
    tracing::debug!(?config, "starting");

    match cli.mode {
        Mode::Json => {
            let rt = Runtime::new()?;
            rt.block_on(run_stdio(config))
        }
        Mode::Text => {
            let mut game = GameEngine::new(config.engine, config.seed)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_text(&mut game, stdin.lock(), &mut stdout)
        }
    }
}

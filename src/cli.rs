//! Command-line front end: argument parsing and the plain-text play loop.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::adapter::AdapterConfig;
use crate::core::{EngineConfig, GameEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human-readable prompt on stdin/stdout
    Text,
    /// Line-delimited JSON driver on stdin/stdout
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub side: Option<usize>,
}

impl CliArgs {
    /// Apply command-line overrides on top of an environment-derived config
    pub fn apply(&self, mut config: AdapterConfig) -> AdapterConfig {
        if let Some(side) = self.side {
            let EngineConfig {
                next_block_len,
                palette_size,
                ..
            } = config.engine;
            config.engine = EngineConfig {
                next_block_len,
                palette_size,
                ..EngineConfig::with_side(side)
            };
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

/// Parse arguments after the program name
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        mode: Mode::Text,
        seed: None,
        side: None,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => parsed.mode = Mode::Json,
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                parsed.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--side" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --side"))?;
                parsed.side = Some(
                    v.parse::<usize>()
                        .map_err(|_| anyhow!("invalid --side value: {}", v))?,
                );
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(parsed)
}

pub const HELP: &str = "commands: new | tap <index> | tap <row> <col> | show | quit";

/// Write the grid, score, next block and status
pub fn render<W: Write>(game: &GameEngine, out: &mut W) -> Result<()> {
    write!(out, "{}", game.grid())?;
    let next: String = game.next_block().iter().map(|c| c.as_char()).collect();
    writeln!(
        out,
        "score {}  next [{}]  {}",
        game.score(),
        next,
        game.phase().as_str()
    )?;
    if let Some(sel) = game.selection() {
        let (row, col) = game.grid().row_col(sel);
        writeln!(out, "selected {} ({}, {})", sel, row, col)?;
    }
    let status = game.status();
    if !status.is_empty() {
        writeln!(out, "> {}", status)?;
    }
    Ok(())
}

/// Interactive loop until `quit` or end of input
pub fn run_text<R: BufRead, W: Write>(game: &mut GameEngine, input: R, out: &mut W) -> Result<()> {
    let rules = game.config();
    writeln!(
        out,
        "{0}x{0} grid, lines of {1}, {2} pieces per drop",
        rules.side, rules.line_goal, rules.next_block_len
    )?;
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["new"] | ["n"] => {
                game.start();
            }
            ["show"] => {}
            ["tap", rest @ ..] | ["t", rest @ ..] => match parse_cell(game, rest) {
                Ok(index) => {
                    if let Err(e) = game.tap(index) {
                        writeln!(out, "error: {}", e)?;
                        continue;
                    }
                }
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            },
            _ => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
        }
        render(game, out)?;
        out.flush()?;
    }
    Ok(())
}

fn parse_cell(game: &GameEngine, words: &[&str]) -> Result<usize> {
    match words {
        [index] => index
            .parse::<usize>()
            .map_err(|_| anyhow!("invalid cell index: {}", index)),
        [row, col] => {
            let row = row
                .parse::<isize>()
                .map_err(|_| anyhow!("invalid row: {}", row))?;
            let col = col
                .parse::<isize>()
                .map_err(|_| anyhow!("invalid column: {}", col))?;
            game.grid()
                .index_at(row, col)
                .ok_or_else(|| anyhow!("({}, {}) is outside the grid", row, col))
        }
        _ => Err(anyhow!("tap takes an index or a row and column")),
    }
}

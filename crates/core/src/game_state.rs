//! Game state module - the turn and game life cycle
//!
//! This module ties together the grid, path finding, line scanning, spawning
//! and scoring. One [`GameEngine`] value is one game session: it owns the grid,
//! the selection, the queued next block, the score and its RNG. Every inbound
//! call runs to completion (move, clears, drops, cascades) before returning.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError, GridError, SpawnError};
use crate::grid::Grid;
use crate::lines::LineScanner;
use crate::path::PathFinder;
use crate::scoring::status_text;
use crate::snapshot::GameSnapshot;
use crate::spawner::{drop_one, next_block, seeded_rng, GameRng, NextBlock};
use crate::types::{Color, Phase, TapOutcome};

use rand::Rng;

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameEngine<R = GameRng> {
    config: EngineConfig,
    grid: Grid,
    phase: Phase,
    selection: Option<usize>,
    next_block: NextBlock,
    score: u32,
    /// Monotonic game counter (increments on every start).
    episode_id: u32,
    last_outcome: Option<TapOutcome>,
    paths: PathFinder,
    scanner: LineScanner,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Create an engine whose randomness is replayable from `seed`
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seeded_rng(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an injected random source. No game is running yet.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.side),
            phase: Phase::NotStarted,
            selection: None,
            next_block: NextBlock::new(),
            score: 0,
            episode_id: 0,
            last_outcome: None,
            paths: PathFinder::new(),
            scanner: LineScanner::new(config.line_goal),
            rng,
        })
    }

    /// Resume play on an existing grid: score 0, nothing selected, a fresh
    /// next block, waiting for a selection.
    pub fn with_grid(config: EngineConfig, grid: Grid, rng: R) -> Result<Self, EngineError> {
        if grid.side() != config.side {
            return Err(GridError::Malformed(format!(
                "grid side {} does not match configured side {}",
                grid.side(),
                config.side
            ))
            .into());
        }
        let mut engine = Self::with_rng(config, rng)?;
        engine.grid = grid;
        engine.next_block = next_block(
            &mut engine.rng,
            config.next_block_len,
            config.palette_size,
        );
        engine.phase = Phase::AwaitingSelection;
        engine.episode_id = 1;
        Ok(engine)
    }

    /// Start a new game, discarding any game in progress
    pub fn start(&mut self) -> TapOutcome {
        self.score = 0;
        self.selection = None;
        self.grid.reset();

        let opening = next_block(
            &mut self.rng,
            self.config.next_block_len,
            self.config.palette_size,
        );
        for color in opening {
            if drop_one(&mut self.grid, &mut self.rng, color).is_err() {
                break;
            }
        }
        self.next_block = next_block(
            &mut self.rng,
            self.config.next_block_len,
            self.config.palette_size,
        );

        self.phase = Phase::AwaitingSelection;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode = self.episode_id, "game started");
        self.record(TapOutcome::Started)
    }

    /// Tap a cell while nothing is selected: picks up an occupied cell.
    pub fn select(&mut self, index: usize) -> Result<TapOutcome, EngineError> {
        let color = self.grid.get(index)?;
        let outcome = match self.phase {
            Phase::AwaitingSelection if !color.is_empty() => {
                self.selection = Some(index);
                self.phase = Phase::PieceSelected;
                TapOutcome::Selected { index }
            }
            Phase::AwaitingSelection | Phase::PieceSelected => TapOutcome::Ignored,
            Phase::NotStarted | Phase::GameOver => TapOutcome::NotStarted,
        };
        Ok(self.record(outcome))
    }

    /// Tap a cell while a piece is selected: cancel, reselect or move.
    pub fn target_tap(&mut self, index: usize) -> Result<TapOutcome, EngineError> {
        let target = self.grid.get(index)?;
        let from = match (self.phase, self.selection) {
            (Phase::PieceSelected, Some(from)) => from,
            (Phase::NotStarted | Phase::GameOver, _) => {
                return Ok(self.record(TapOutcome::NotStarted))
            }
            _ => return Ok(self.record(TapOutcome::Ignored)),
        };

        // Every attempt ends the selection, whatever its result.
        self.selection = None;
        self.phase = Phase::AwaitingSelection;

        if index == from {
            return Ok(self.record(TapOutcome::Cancelled));
        }
        if !target.is_empty() {
            return Ok(self.record(TapOutcome::SelectionChanged));
        }
        if !self.paths.path_exists(&self.grid, from, index)? {
            debug!(from, to = index, "move rejected: no path");
            return Ok(self.record(TapOutcome::Rejected));
        }

        self.grid.move_piece(from, index)?;
        let clear = self.scanner.scan_and_clear(&mut self.grid, index)?;
        if !clear.is_empty() {
            self.score = self.score.saturating_add(clear.points);
            debug!(
                from,
                to = index,
                axes = ?clear.axes,
                points = clear.points,
                score = self.score,
                "move cleared lines"
            );
            return Ok(self.record(TapOutcome::Scored {
                lines: clear.lines(),
                points: clear.points,
            }));
        }

        let outcome = self.drop_next_block()?;
        Ok(self.record(outcome))
    }

    /// Single entry point for a tap, dispatching on the current phase
    pub fn tap(&mut self, index: usize) -> Result<TapOutcome, EngineError> {
        match self.phase {
            Phase::AwaitingSelection => self.select(index),
            Phase::PieceSelected => self.target_tap(index),
            Phase::NotStarted | Phase::GameOver => {
                self.grid.get(index)?;
                Ok(self.record(TapOutcome::NotStarted))
            }
        }
    }

    /// Drop the queued pieces one by one, scanning after each drop.
    fn drop_next_block(&mut self) -> Result<TapOutcome, EngineError> {
        let block = self.next_block.clone();
        let mut dropped = 0usize;
        let mut cascade_lines = 0u32;
        let mut cascade_points = 0u32;

        for color in block {
            let index = match drop_one(&mut self.grid, &mut self.rng, color) {
                Ok(index) => index,
                Err(SpawnError::BoardFull) => break,
            };
            dropped += 1;
            let clear = self.scanner.scan_and_clear(&mut self.grid, index)?;
            if !clear.is_empty() {
                debug!(index, axes = ?clear.axes, points = clear.points, "drop cleared lines");
            }
            cascade_lines += clear.lines();
            cascade_points += clear.points;
        }
        self.score = self.score.saturating_add(cascade_points);

        if self.grid.count_empty() == 0 {
            self.phase = Phase::GameOver;
            debug!(episode = self.episode_id, score = self.score, "game over");
            return Ok(TapOutcome::GameOver { score: self.score });
        }

        self.next_block = next_block(
            &mut self.rng,
            self.config.next_block_len,
            self.config.palette_size,
        );
        Ok(TapOutcome::Moved {
            dropped,
            cascade_lines,
            cascade_points,
        })
    }

    fn record(&mut self, outcome: TapOutcome) -> TapOutcome {
        self.last_outcome = Some(outcome);
        outcome
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase.is_started()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn next_block(&self) -> &[Color] {
        &self.next_block
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_outcome(&self) -> Option<TapOutcome> {
        self.last_outcome
    }

    /// Advisory feedback text for the last call (empty when there is nothing to say)
    pub fn status(&self) -> String {
        self.last_outcome
            .as_ref()
            .map(status_text)
            .unwrap_or_default()
    }

    /// Fill `out` with the current state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.side = self.grid.side();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.selection = self.selection;
        out.next_block.clear();
        out.next_block.extend(self.next_block.iter().copied());
        out.score = self.score;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.last_outcome = self.last_outcome;
        out.status = self.status();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

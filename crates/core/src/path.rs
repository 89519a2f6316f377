//! Path module - move legality
//!
//! A piece may travel from its cell to a target only through empty cells,
//! stepping up, down, left or right. Reachability is answered with an
//! iterative breadth-first flood fill.

use std::collections::VecDeque;

use crate::error::GridError;
use crate::grid::Grid;

/// Orthogonal neighbour offsets as (row, column) deltas
const NEIGHBOURS_4: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Flood-fill reachability over empty cells.
///
/// Holds its scratch buffers so repeated queries do not reallocate; every call
/// starts from a cleared state.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    visited: Vec<bool>,
    frontier: VecDeque<usize>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `to` can be reached from `from` through empty cells.
    ///
    /// The occupancy of the endpoints themselves is ignored: `from` holds the
    /// moving piece and `to` is never treated as a wall. `from == to` is
    /// reachable; rejecting a self-move is the caller's job.
    pub fn path_exists(&mut self, grid: &Grid, from: usize, to: usize) -> Result<bool, GridError> {
        grid.get(from)?;
        grid.get(to)?;

        self.visited.clear();
        self.visited.resize(grid.len(), false);
        self.frontier.clear();

        self.visited[from] = true;
        self.frontier.push_back(from);

        let cells = grid.cells();
        while let Some(index) = self.frontier.pop_front() {
            if index == to {
                return Ok(true);
            }
            let (row, col) = grid.row_col(index);
            for (dr, dc) in NEIGHBOURS_4 {
                let Some(next) = grid.index_at(row as isize + dr, col as isize + dc) else {
                    continue;
                };
                if self.visited[next] {
                    continue;
                }
                if next == to || cells[next].is_empty() {
                    self.visited[next] = true;
                    self.frontier.push_back(next);
                }
            }
        }

        Ok(self.visited[to])
    }
}

/// One-off reachability query with throwaway buffers
pub fn path_exists(grid: &Grid, from: usize, to: usize) -> Result<bool, GridError> {
    PathFinder::new().path_exists(grid, from, to)
}

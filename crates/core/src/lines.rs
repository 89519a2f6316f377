//! Lines module - line detection and clearing around a pivot cell
//!
//! After a piece lands (moved or dropped) on the pivot, each of the four axes
//! through it is scanned for a run of the pivot's color. Every axis whose run
//! (pivot included) reaches the line goal is cleared. Axes are independent, so
//! one pivot can complete a cross or a star.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::grid::Grid;
use crate::scoring::line_points;
use crate::types::Color;

/// The four scan axes, each a pair of opposite (row, column) steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North-west to south-east
    Diagonal,
    /// North-east to south-west
    AntiDiagonal,
    /// West to east along a row
    Horizontal,
    /// North to south along a column
    Vertical,
}

impl Axis {
    /// Scan order
    pub const ALL: [Axis; 4] = [
        Axis::Diagonal,
        Axis::AntiDiagonal,
        Axis::Horizontal,
        Axis::Vertical,
    ];

    /// The two opposite unit steps along this axis
    pub fn steps(&self) -> [(isize, isize); 2] {
        match self {
            Axis::Diagonal => [(-1, -1), (1, 1)],
            Axis::AntiDiagonal => [(-1, 1), (1, -1)],
            Axis::Horizontal => [(0, -1), (0, 1)],
            Axis::Vertical => [(-1, 0), (1, 0)],
        }
    }
}

/// What one scan removed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Completed axes, in scan order
    pub axes: ArrayVec<Axis, 4>,
    /// Cells set to empty, pivot included
    pub cells_cleared: usize,
    /// Score increment for this scan
    pub points: u32,
}

impl LineClear {
    /// Number of completed lines
    pub fn lines(&self) -> u32 {
        self.axes.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// Scanner with reusable scratch buffers for the run and the marked cells.
#[derive(Debug, Clone)]
pub struct LineScanner {
    goal: usize,
    run: Vec<usize>,
    marked: Vec<usize>,
}

impl LineScanner {
    pub fn new(goal: usize) -> Self {
        Self {
            goal,
            run: Vec::new(),
            marked: Vec::new(),
        }
    }

    /// Scan the four axes through `pivot` and clear every completed line.
    ///
    /// An empty pivot never forms a line. When nothing completes, the grid is
    /// left untouched and the result is empty.
    pub fn scan_and_clear(&mut self, grid: &mut Grid, pivot: usize) -> Result<LineClear, GridError> {
        let color = grid.get(pivot)?;
        let mut result = LineClear::default();
        if color == Color::Empty {
            return Ok(result);
        }

        self.marked.clear();
        let (row, col) = grid.row_col(pivot);
        for axis in Axis::ALL {
            self.run.clear();
            for (dr, dc) in axis.steps() {
                let mut r = row as isize + dr;
                let mut c = col as isize + dc;
                while let Some(next) = grid.index_at(r, c) {
                    if grid.cells()[next] != color {
                        break;
                    }
                    self.run.push(next);
                    r += dr;
                    c += dc;
                }
            }
            // +1: the pivot belongs to the run but is not in the buffer
            if self.run.len() + 1 >= self.goal {
                result.axes.push(axis);
                self.marked.extend_from_slice(&self.run);
            }
        }

        if result.axes.is_empty() {
            return Ok(result);
        }

        self.marked.sort_unstable();
        self.marked.dedup();
        for &index in &self.marked {
            grid.set(index, Color::Empty)?;
        }
        grid.set(pivot, Color::Empty)?;

        result.cells_cleared = self.marked.len() + 1;
        result.points = line_points(self.marked.len(), result.axes.len());
        Ok(result)
    }
}

/// One-off scan with throwaway buffers
pub fn scan_and_clear(grid: &mut Grid, pivot: usize, goal: usize) -> Result<LineClear, GridError> {
    LineScanner::new(goal).scan_and_clear(grid, pivot)
}

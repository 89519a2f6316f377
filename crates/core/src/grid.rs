//! Grid module - the square playfield
//!
//! The grid is an NxN array of [`Color`] values stored flat in row-major order
//! (`index = row * side + column`). `Color::Empty` marks a free cell.
//! The side length is fixed when the grid is created.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::types::Color;

/// The square game grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    /// Flat array of cells, row-major order (row * side + column)
    cells: Vec<Color>,
}

impl Grid {
    /// Create a new empty grid of `side * side` cells
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Color::Empty; side * side],
        }
    }

    /// Build a grid from a flat row-major cell vector
    pub fn from_cells(side: usize, cells: Vec<Color>) -> Result<Self, GridError> {
        if cells.len() != side * side {
            return Err(GridError::Malformed(format!(
                "expected {} cells for side {}, got {}",
                side * side,
                side,
                cells.len()
            )));
        }
        Ok(Self { side, cells })
    }

    /// Side length (N)
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (N²)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty_grid(&self) -> bool {
        self.cells.iter().all(Color::is_empty)
    }

    #[inline(always)]
    fn check(&self, index: usize) -> Result<usize, GridError> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(GridError::OutOfRange {
                index,
                len: self.cells.len(),
            })
        }
    }

    /// Get the color at `index`
    pub fn get(&self, index: usize) -> Result<Color, GridError> {
        self.check(index).map(|idx| self.cells[idx])
    }

    /// Set the color at `index`. No rule validation.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), GridError> {
        let idx = self.check(index)?;
        self.cells[idx] = color;
        Ok(())
    }

    pub fn is_empty(&self, index: usize) -> Result<bool, GridError> {
        self.get(index).map(|c| c.is_empty())
    }

    pub fn is_occupied(&self, index: usize) -> Result<bool, GridError> {
        self.get(index).map(|c| !c.is_empty())
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Indices of all empty cells, ascending
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Clear the entire grid
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Color::Empty;
        }
    }

    /// Move the content of `from` to `to` and empty `from`
    pub fn move_piece(&mut self, from: usize, to: usize) -> Result<(), GridError> {
        let color = self.get(from)?;
        self.check(to)?;
        self.cells[to] = color;
        self.cells[from] = Color::Empty;
        Ok(())
    }

    /// (row, column) of an in-range index
    #[inline(always)]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// Flat index of a signed (row, column), or `None` outside the grid
    #[inline(always)]
    pub fn index_at(&self, row: isize, col: isize) -> Option<usize> {
        let side = self.side as isize;
        if row < 0 || col < 0 || row >= side || col >= side {
            return None;
        }
        Some(row as usize * self.side + col as usize)
    }

    /// Read-only view of the cells, row-major
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.side.max(1))
    }
}

/// Rows of `.`/`1`..`6` characters separated by whitespace.
///
/// ```
/// use color_lines_core::Grid;
///
/// let grid: Grid = "1.. .2. ..3".parse().unwrap();
/// assert_eq!(grid.side(), 3);
/// assert_eq!(grid.count_empty(), 6);
/// assert_eq!(grid.to_string(), "1..\n.2.\n..3\n");
/// ```
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        let side = rows.len();
        if side == 0 {
            return Err(GridError::Malformed("no rows".to_string()));
        }

        let mut cells = Vec::with_capacity(side * side);
        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            for ch in row.chars() {
                let color = Color::from_char(ch).ok_or_else(|| {
                    GridError::Malformed(format!("unknown cell {:?} in row {}", ch, r))
                })?;
                cells.push(color);
            }
            if cells.len() - before != side {
                return Err(GridError::Malformed(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    cells.len() - before,
                    side
                )));
            }
        }
        Self::from_cells(side, cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Grid representation and utilities for Game of Life

use super::Cell;
use crate::error::{Result, SimulatorError};
use std::fmt;

/// Fixed-size rectangular grid stored as a row-major buffer.
///
/// Dimensions are set at construction and never change; only cell values do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimulatorError::InvalidGrid(format!(
                "Grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a grid from rows of 0/1 values
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| SimulatorError::InvalidGrid("Grid cannot be empty".to_string()))?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(SimulatorError::InvalidGrid(
                "Grid width cannot be zero".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SimulatorError::InvalidGrid(format!(
                    "Row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            for (j, &bit) in row.iter().enumerate() {
                let cell = Cell::from_bit(bit).ok_or_else(|| {
                    SimulatorError::InvalidGrid(format!(
                        "Cell ({}, {}) has value {}, expected 0 or 1",
                        i, j, bit
                    ))
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at coordinates; out of bounds cells are dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(SimulatorError::InvalidArgument(format!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.height, self.width
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count living neighbors among the in-bounds Moore neighborhood.
    /// Coordinates outside the grid are never counted (no wraparound).
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height - 1);
        let mut count = 0;
        for r in rows {
            for c in col.saturating_sub(1)..=(col + 1).min(self.width - 1) {
                if (r, c) != (row, col) && self.cells[self.index(r, c)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Copy out as rows of 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_bit()).collect())
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of cells alive (0.0 to 1.0)
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = if cell.is_alive() { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Double-buffered generation stepper

use super::{GameOfLifeRules, Grid};
use crate::error::{Result, SimulatorError};
use std::iter::FusedIterator;

/// Owns a grid and advances it one generation at a time.
///
/// Two equally sized buffers are kept; each step writes the next generation
/// into the back buffer and swaps, so nothing is reallocated per generation.
#[derive(Debug, Clone)]
pub struct GridSimulator {
    front: Grid,
    back: Grid,
    generation: u64,
}

impl GridSimulator {
    /// Build a simulator from rows of 0/1 values as generation 0
    pub fn new<R: AsRef<[u8]>>(seed: &[R]) -> Result<Self> {
        Ok(Self::from_grid(Grid::from_rows(seed)?))
    }

    /// Build a simulator from an already validated grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            back: grid.clone(),
            front: grid,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow the current grid
    pub fn grid(&self) -> &Grid {
        &self.front
    }

    /// Independent copy of the current grid
    pub fn snapshot(&self) -> Grid {
        self.front.clone()
    }

    /// Step one generation and return a copy of the new grid
    pub fn advance(&mut self) -> Grid {
        self.step();
        self.snapshot()
    }

    fn step(&mut self) {
        GameOfLifeRules::evolve_into(&self.front, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            living = self.front.living_count(),
            "advanced"
        );
    }

    /// Lazily yield `frames` snapshots: the current grid first, then one
    /// advance before each following snapshot.
    pub fn run(&mut self, frames: usize) -> Result<Frames<'_>> {
        if frames == 0 {
            return Err(SimulatorError::InvalidArgument(
                "Number of frames must be positive".to_string(),
            ));
        }
        Ok(Frames {
            simulator: self,
            remaining: frames,
            started: false,
        })
    }
}

/// Finite frame sequence produced by [`GridSimulator::run`]
#[derive(Debug)]
pub struct Frames<'a> {
    simulator: &'a mut GridSimulator,
    remaining: usize,
    started: bool,
}

impl Iterator for Frames<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.started {
            Some(self.simulator.advance())
        } else {
            self.started = true;
            Some(self.simulator.snapshot())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}

//! Game of Life transition rules

use super::{Cell, Grid};

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Write the next generation of `current` into `next`.
    ///
    /// Every next state is read from `current` only, so no cell observes a
    /// neighbor that was already updated in the same step. Both grids must
    /// have the same dimensions.
    pub(crate) fn evolve_into(current: &Grid, next: &mut Grid) {
        assert!(
            current.same_dimensions(next),
            "evolve_into needs matching dimensions"
        );
        let width = current.width();
        for (i, slot) in next.cells_mut().iter_mut().enumerate() {
            let (row, col) = (i / width, i % width);
            *slot = current.get(row, col).evolve(current.count_neighbors(row, col));
        }
    }

    /// Evolve the grid one generation forward into a fresh grid
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::evolve_into(current, &mut next);
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut front = grid.clone();
        let mut back = grid.clone();
        for _ in 0..generations {
            Self::evolve_into(&front, &mut back);
            std::mem::swap(&mut front, &mut back);
        }
        front
    }

    /// Check if a cell should be alive in the next generation
    pub fn should_be_alive(current: Cell, neighbor_count: u8) -> bool {
        current.evolve(neighbor_count).is_alive()
    }

    /// Maximum neighbor count in the Moore neighborhood
    pub const fn max_neighbor_count() -> u8 {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let block = grid(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]);
        assert_eq!(GameOfLifeRules::evolve(&block), block);
    }

    #[test]
    fn test_oscillator_blinker() {
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let horizontal = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);

        let evolved = GameOfLifeRules::evolve(&vertical);
        assert_eq!(evolved, horizontal);
        assert_eq!(GameOfLifeRules::evolve(&evolved), vertical);
    }

    #[test]
    fn test_evolve_preserves_dimensions() {
        let seeds = [
            grid(&[&[1]]),
            grid(&[&[1, 0, 1, 1, 0]]),
            grid(&[&[1], &[1], &[0]]),
            grid(&[&[0, 1, 1, 0], &[1, 0, 0, 1], &[0, 1, 1, 0]]),
        ];
        for seed in &seeds {
            let evolved = GameOfLifeRules::evolve(seed);
            assert_eq!(evolved.dimensions(), seed.dimensions());
        }
    }

    #[test]
    fn test_all_dead_is_fixed_point() {
        let dead = Grid::new(5, 4).unwrap();
        assert_eq!(GameOfLifeRules::evolve(&dead), dead);
        assert_eq!(GameOfLifeRules::evolve_generations(&dead, 10), dead);
    }

    #[test]
    fn test_overcrowded_center_dies() {
        // Center has 4 neighbors
        let g = grid(&[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]);
        let next = GameOfLifeRules::evolve(&g);
        assert!(!next.is_alive(1, 1));
    }

    #[test]
    fn test_synchronous_update() {
        // In-place row-major update would kill (0,0) and (0,2) before (1,1) is counted
        let g = grid(&[&[1, 0, 1], &[0, 0, 0], &[0, 1, 0]]);
        let next = GameOfLifeRules::evolve(&g);
        assert_eq!(next.to_rows(), vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_evolve_generations_matches_repeated_evolve() {
        let glider = grid(&[
            &[0, 1, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let mut stepped = glider.clone();
        for _ in 0..3 {
            stepped = GameOfLifeRules::evolve(&stepped);
        }
        assert_eq!(GameOfLifeRules::evolve_generations(&glider, 3), stepped);
        assert_eq!(GameOfLifeRules::evolve_generations(&glider, 0), glider);
    }

    #[test]
    fn test_evolve_into_overwrites_stale_buffer() {
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let mut next = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        GameOfLifeRules::evolve_into(&vertical, &mut next);
        assert_eq!(next.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    }

    #[test]
    #[should_panic(expected = "matching dimensions")]
    fn test_evolve_into_rejects_mismatched_buffer() {
        let current = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let mut next = Grid::new(2, 3).unwrap();
        GameOfLifeRules::evolve_into(&current, &mut next);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(Cell::Alive, 2));
        assert!(GameOfLifeRules::should_be_alive(Cell::Alive, 3));
        assert!(GameOfLifeRules::should_be_alive(Cell::Dead, 3));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Alive, 1));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Alive, 4));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Dead, 2));
        assert_eq!(GameOfLifeRules::max_neighbor_count(), 8);
    }
}

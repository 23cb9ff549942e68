//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod simulator;

pub use cell::Cell;
pub use grid::Grid;
pub use io::{create_example_seeds, load_grid_from_file, parse_grid, save_grid_to_file};
pub use patterns::Pattern;
pub use rules::GameOfLifeRules;
pub use simulator::{Frames, GridSimulator};

//! Built-in seed patterns

use serde::{Deserialize, Serialize};

/// Seeds selectable from the command line and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Glider,
    Blinker,
    Block,
    Beacon,
    Toad,
}

impl Pattern {
    pub fn all() -> [Pattern; 5] {
        [
            Pattern::Glider,
            Pattern::Blinker,
            Pattern::Block,
            Pattern::Beacon,
            Pattern::Toad,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Beacon => "beacon",
            Pattern::Toad => "toad",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Pattern::Glider => "Spaceship, moves one cell diagonally every 4 generations",
            Pattern::Blinker => "Oscillator (period 2)",
            Pattern::Block => "Still life",
            Pattern::Beacon => "Oscillator (period 2)",
            Pattern::Toad => "Oscillator (period 2)",
        }
    }

    /// Seed rows, 1 = alive
    pub fn seed(self) -> Vec<Vec<u8>> {
        let rows: &[&[u8]] = match self {
            // Glider heading south-east across an 8x8 board
            Pattern::Glider => &[
                &[0, 1, 0, 0, 0, 0, 0, 0],
                &[0, 0, 1, 0, 0, 0, 0, 0],
                &[1, 1, 1, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0],
            ],
            Pattern::Blinker => &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]],
            Pattern::Block => &[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]],
            Pattern::Beacon => &[
                &[1, 1, 0, 0],
                &[1, 1, 0, 0],
                &[0, 0, 1, 1],
                &[0, 0, 1, 1],
            ],
            Pattern::Toad => &[
                &[0, 0, 0, 0],
                &[0, 1, 1, 1],
                &[1, 1, 1, 0],
                &[0, 0, 0, 0],
            ],
        };
        rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

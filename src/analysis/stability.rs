//! Classification of a frame sequence

use crate::game_of_life::Grid;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Longest oscillator period that is searched for
pub const MAX_PERIOD: usize = 8;

/// What a run of frames looks like as a whole
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunAnalysis {
    /// Number of frames analyzed
    pub frames: usize,
    /// Living cells per frame
    pub populations: Vec<usize>,
    /// Last frame has no living cells
    pub is_extinct: bool,
    /// First two frames are identical
    pub is_still_life: bool,
    /// Smallest repeating period (2..=8), if any
    pub oscillation_period: Option<usize>,
    /// Living cells drift away from where they started
    pub has_moving_patterns: bool,
}

impl RunAnalysis {
    /// Analyze a sequence of frames, oldest first
    pub fn analyze(frames: &[Grid]) -> Self {
        let populations = frames.iter().map(Grid::living_count).collect();

        Self {
            frames: frames.len(),
            populations,
            is_extinct: frames.last().is_some_and(Grid::is_extinct),
            is_still_life: Self::check_still_life(frames),
            oscillation_period: Self::check_oscillator(frames),
            has_moving_patterns: Self::check_moving_patterns(frames),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_oscillator(&self) -> bool {
        self.oscillation_period.is_some()
    }

    pub fn peak_population(&self) -> usize {
        self.populations.iter().copied().max().unwrap_or(0)
    }

    /// Short label for summaries
    pub fn kind(&self) -> &'static str {
        if self.is_extinct {
            "Extinct"
        } else if self.is_still_life {
            "Still Life"
        } else if self.is_oscillator() {
            "Oscillator"
        } else if self.has_moving_patterns {
            "Moving Pattern"
        } else {
            "Other"
        }
    }

    fn check_still_life(frames: &[Grid]) -> bool {
        frames.len() >= 2 && frames[0] == frames[1] && !frames[0].is_extinct()
    }

    fn check_oscillator(frames: &[Grid]) -> Option<usize> {
        if frames.len() < 3 || frames[0] == frames[1] {
            return None;
        }

        (2..=MAX_PERIOD.min(frames.len() - 1)).find(|&period| {
            frames[0] == frames[period]
                && (1..period)
                    .filter(|i| i + period < frames.len())
                    .all(|i| frames[i] == frames[i + period])
        })
    }

    /// A frame with the same population as the first but a center of mass
    /// more than half a cell away means something traveled.
    fn check_moving_patterns(frames: &[Grid]) -> bool {
        let Some((first, rest)) = frames.split_first() else {
            return false;
        };
        let origin = first.living_cells();
        if origin.is_empty() {
            return false;
        }
        let (oy, ox) = center_of_mass(&origin);

        rest.iter()
            .map(Grid::living_cells)
            .filter(|cells| cells.len() == origin.len())
            .any(|cells| {
                let (cy, cx) = center_of_mass(&cells);
                ((oy - cy).powi(2) + (ox - cx).powi(2)).sqrt() > 0.5
            })
    }
}

/// (row, col) mean of the given cells
fn center_of_mass(cells: &[(usize, usize)]) -> (f64, f64) {
    let n = cells.len() as f64;
    let (sum_r, sum_c) = cells
        .iter()
        .fold((0usize, 0usize), |(r, c), &(row, col)| (r + row, c + col));
    (sum_r as f64 / n, sum_c as f64 / n)
}

impl fmt::Display for RunAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Analysis:")?;
        writeln!(f, "  Frames: {}", self.frames)?;
        writeln!(f, "  Type: {}", self.kind())?;
        if let Some(period) = self.oscillation_period {
            writeln!(f, "  Period: {}", period)?;
        }
        writeln!(f, "  Peak population: {}", self.peak_population())?;
        writeln!(f, "  Populations: {}", self.populations.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{GridSimulator, Pattern};

    fn frames_of(pattern: Pattern, count: usize) -> Vec<Grid> {
        let mut sim = GridSimulator::new(&pattern.seed()).unwrap();
        sim.run(count).unwrap().collect()
    }

    #[test]
    fn test_block_is_still_life() {
        let analysis = RunAnalysis::analyze(&frames_of(Pattern::Block, 4));
        assert!(analysis.is_still_life);
        assert!(!analysis.is_oscillator());
        assert_eq!(analysis.kind(), "Still Life");
        assert_eq!(analysis.populations, vec![4; 4]);
    }

    #[test]
    fn test_blinker_period_two() {
        let analysis = RunAnalysis::analyze(&frames_of(Pattern::Blinker, 6));
        assert_eq!(analysis.oscillation_period, Some(2));
        assert!(!analysis.is_still_life);
        assert_eq!(analysis.kind(), "Oscillator");
    }

    #[test]
    fn test_glider_moves() {
        let analysis = RunAnalysis::analyze(&frames_of(Pattern::Glider, 8));
        assert!(analysis.has_moving_patterns);
        assert!(!analysis.is_oscillator());
        assert_eq!(analysis.kind(), "Moving Pattern");
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let mut sim = GridSimulator::new(&[[0u8, 0], [0, 1]]).unwrap();
        let frames: Vec<Grid> = sim.run(3).unwrap().collect();
        let analysis = RunAnalysis::analyze(&frames);
        assert!(analysis.is_extinct);
        assert!(!analysis.is_still_life);
        assert_eq!(analysis.populations, vec![1, 0, 0]);
        assert_eq!(analysis.kind(), "Extinct");
    }

    #[test]
    fn test_single_frame() {
        let analysis = RunAnalysis::analyze(&frames_of(Pattern::Blinker, 1));
        assert_eq!(analysis.frames, 1);
        assert!(!analysis.is_still_life);
        assert_eq!(analysis.oscillation_period, None);
        assert!(!analysis.has_moving_patterns);
    }

    #[test]
    fn test_json_report() {
        let json = RunAnalysis::analyze(&frames_of(Pattern::Blinker, 4))
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["frames"], 4);
        assert_eq!(value["oscillation_period"], 2);
        assert_eq!(value["populations"], serde_json::json!([3, 3, 3, 3]));
        assert_eq!(value["is_still_life"], false);
    }

    #[test]
    fn test_display_lists_populations() {
        let text = RunAnalysis::analyze(&frames_of(Pattern::Blinker, 3)).to_string();
        assert!(text.contains("Period: 2"));
        assert!(text.contains("Populations: 3 3 3"));
    }
}

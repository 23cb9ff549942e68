//! Conway's Game of Life frame generator
//!
//! A bounded (non-wrapping) Game of Life simulator that advances a fixed-size
//! grid one generation at a time and hands out independent snapshots for
//! rendering.

pub mod analysis;
pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use analysis::RunAnalysis;
pub use config::Settings;
pub use error::{Result, SimulatorError};
pub use game_of_life::{Cell, Grid, GridSimulator, Pattern};

/// Build the seed grid named by the settings: the seed file if one is set,
/// otherwise the built-in pattern
pub fn load_seed(settings: &Settings) -> anyhow::Result<Grid> {
    match settings.simulation.seed_file {
        Some(ref path) => game_of_life::load_grid_from_file(path),
        None => Ok(Grid::from_rows(&settings.simulation.pattern.seed())?),
    }
}

/// Main entry point: simulate the configured number of frames
pub fn generate_frames(settings: &Settings) -> anyhow::Result<Vec<Grid>> {
    let seed = load_seed(settings)?;
    tracing::info!(
        width = seed.width(),
        height = seed.height(),
        frames = settings.simulation.frames,
        "Simulating"
    );

    let mut simulator = GridSimulator::from_grid(seed);
    let frames = simulator.run(settings.simulation.frames)?.collect();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_frames_from_defaults() {
        let frames = generate_frames(&Settings::default()).unwrap();
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[0], Grid::from_rows(&Pattern::Glider.seed()).unwrap());
        assert!(frames.iter().all(|f| f.living_count() == 5));
    }

    #[test]
    fn test_generate_frames_rejects_zero() {
        let mut settings = Settings::default();
        settings.simulation.frames = 0;
        let err = generate_frames(&settings).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimulatorError>(),
            Some(SimulatorError::InvalidArgument(_))
        ));
    }
}

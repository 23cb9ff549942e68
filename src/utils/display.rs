//! Display and output formatting utilities

use super::raster;
use crate::config::OutputFormat;
use crate::game_of_life::{io::grid_to_string, Grid};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One snapshot as written to `frames.json`
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub generation: u64,
    pub population: usize,
    pub grid: Vec<String>,
}

impl FrameRecord {
    pub fn new(generation: u64, grid: &Grid) -> Self {
        Self {
            generation,
            population: grid.living_count(),
            grid: grid_to_string(grid).lines().map(str::to_string).collect(),
        }
    }
}

/// Formats frames for the console and writes them to disk
pub struct FrameFormatter;

impl FrameFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in grid.rows() {
            output.extend(row.iter().map(|cell| if cell.is_alive() { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format every frame with its generation and population
    pub fn format_run(frames: &[Grid], first_generation: u64) -> String {
        let mut output = String::new();
        for (generation, grid) in (first_generation..).zip(frames) {
            output.push_str(&format!(
                "Generation {} (Living: {}):\n",
                generation,
                grid.living_count()
            ));
            output.push_str(&Self::format_grid_compact(grid));
            output.push('\n');
        }
        output
    }

    /// Save frames to `output_dir` in the given format, returning the files written
    pub fn save_frames<P: AsRef<Path>>(
        frames: &[Grid],
        first_generation: u64,
        output_dir: P,
        format: OutputFormat,
    ) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let mut written = Vec::new();
        match format {
            OutputFormat::Text | OutputFormat::Pgm => {
                let (extension, encode): (&str, fn(&Grid) -> String) = match format {
                    OutputFormat::Pgm => ("pgm", raster::to_pgm),
                    _ => ("txt", grid_to_string),
                };
                for (generation, grid) in (first_generation..).zip(frames) {
                    let filepath = output_dir.join(format!("frame_{:03}.{}", generation, extension));
                    std::fs::write(&filepath, encode(grid))
                        .with_context(|| format!("Failed to write frame: {}", filepath.display()))?;
                    written.push(filepath);
                }
            }
            OutputFormat::Json => {
                let records: Vec<FrameRecord> = (first_generation..)
                    .zip(frames)
                    .map(|(generation, grid)| FrameRecord::new(generation, grid))
                    .collect();
                let filepath = output_dir.join("frames.json");
                let json = serde_json::to_string_pretty(&records)
                    .context("Failed to serialize frames")?;
                std::fs::write(&filepath, json)
                    .with_context(|| format!("Failed to write frames: {}", filepath.display()))?;
                written.push(filepath);
            }
        }

        tracing::info!(
            frames = frames.len(),
            files = written.len(),
            "Saved frames to {}",
            output_dir.display()
        );
        Ok(written)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

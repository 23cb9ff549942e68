//! Configuration management for the frame generator

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, Settings, SimulationConfig};

//! Error types for the simulator core

use thiserror::Error;

/// Errors surfaced by grid construction and frame generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;

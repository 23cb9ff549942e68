//! Analysis of simulated runs

pub mod stability;

pub use stability::{RunAnalysis, MAX_PERIOD};

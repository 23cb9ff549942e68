//! Rendering and console helpers

pub mod display;
pub mod raster;

pub use display::{Color, ColorOutput, FrameFormatter, FrameRecord};

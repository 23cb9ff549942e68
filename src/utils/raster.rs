//! Raster export of grid snapshots
//!
//! Frames are written as plain-text PGM (`P2`): one pixel per cell,
//! white for dead and black for alive.

use crate::game_of_life::Grid;

pub const MAX_GRAY: u8 = 255;

/// Gray level for a cell: 255 when dead, 0 when alive
pub fn gray_level(alive: bool) -> u8 {
    MAX_GRAY - u8::from(alive) * MAX_GRAY
}

/// Encode one grid as a plain PGM image
pub fn to_pgm(grid: &Grid) -> String {
    let mut out = String::with_capacity(16 + grid.width() * grid.height() * 4);
    out.push_str(&format!("P2\n{} {}\n{}\n", grid.width(), grid.height(), MAX_GRAY));
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|cell| gray_level(cell.is_alive()).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

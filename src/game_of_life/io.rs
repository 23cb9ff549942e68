//! File I/O operations for seed grids

use super::{Grid, Pattern};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load a seed grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation; blank lines are skipped
pub fn parse_grid(content: &str) -> Result<Grid> {
    let mut rows = Vec::new();

    for (row_idx, line) in content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(0u8),
                '1' => Ok(1u8),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<u8>>>()?;
        rows.push(row);
    }

    Ok(Grid::from_rows(&rows)?)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its 0/1 text form
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for row in grid.rows() {
        result.extend(row.iter().map(|cell| if cell.is_alive() { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Write every built-in pattern as `<name>.txt`
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for pattern in Pattern::all() {
        let grid = Grid::from_rows(&pattern.seed())?;
        let path = dir.join(format!("{}.txt", pattern.name()));
        save_grid_to_file(&grid, &path)?;
        written.push(path);
    }

    tracing::debug!("Wrote {} example seeds to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid("010\n101\n010\n").unwrap();

        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.living_count(), 4);
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 0));
        assert!(grid.is_alive(1, 2));
        assert!(grid.is_alive(2, 1));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_padding() {
        let grid = parse_grid("\n  011  \n\n110\n\n").unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 1], vec![1, 1, 0]]);
    }

    #[test]
    fn test_grid_to_string() {
        let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 0, 1]]).unwrap();
        assert_eq!(grid_to_string(&grid), "010\n101\n");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/seed.txt");

        let original = Grid::from_rows(&[[1u8, 0, 1], [0, 1, 0]]).unwrap();
        save_grid_to_file(&original, &file_path).unwrap();

        let loaded = load_grid_from_file(&file_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_grid("010\n1X1\n010\n").is_err());
        assert!(parse_grid("010\n11\n010\n").is_err());
        assert!(parse_grid("").is_err());
        assert!(parse_grid("\n  \n").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_grid_from_file("does/not/exist.txt").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        let written = create_example_seeds(temp_dir.path()).unwrap();
        assert_eq!(written.len(), Pattern::all().len());

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.dimensions(), (8, 8));
        assert_eq!(glider.living_count(), 5);
        assert!(temp_dir.path().join("blinker.txt").exists());
    }
}

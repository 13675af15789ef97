//! Reading puzzles from disk.
//!
//! The one documented way a puzzle enters the system from a file: a flat text
//! grid, one row per line, with optional comma separators. Everything beyond
//! reading the file is delegated to the grid parser.

use crate::errors::LoadError;
use crate::grid::Grid;

use std::fs;
use std::path::Path;

/// Loads a grid from the text file at `path`.
///
/// The file must hold 9 lines of 9 digit characters, `'0'` for empty cells;
/// commas between cells are permitted and stripped.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.parse()?)
}

//! Errors that may be encountered when constructing a grid

use crate::positions::block_of;

/// Error for [`Grid::from_rows`](crate::Grid::from_rows)
#[derive(Debug, thiserror::Error)]
#[error("row array contains entries >9")]
pub struct FromValuesError(pub(crate) ());

/// An invalid grid entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom. Example: Top-row is 0, 1, 2
    #[inline]
    pub fn block(self) -> u8 {
        block_of(self.col(), self.row())
    }
}

/// A structure representing an error caused when parsing the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Accepted values are the digits '0'..='9', with '0' marking an empty cell
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Line contains more or fewer than 9 cells after comma stripping.
    /// Returns index of row (0-8)
    #[error("line {0} does not contain exactly 9 cells")]
    InvalidLineLength(u8),
    /// Input ends with less than 9 rows. Returns number of rows encountered.
    #[error("grid contains {0} rows instead of required 9")]
    NotEnoughRows(u8),
    /// More than 9 non-empty lines are supplied
    #[error("grid contains more than 9 rows")]
    TooManyRows,
}

/// Error for [`load_from_file`](crate::load_from_file)
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The puzzle file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid grid
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#![warn(missing_docs)]
//! The sudoku-grid library
//!
//! ## Overview
//!
//! sudoku-grid is a library that provides a 9x9 sudoku grid with fast
//! membership queries over rows, columns and blocks, and an O(1) cursor over
//! the puzzle's originally-empty cells for a backtracking solver to consume.
//! The grid keeps three synchronized views of the same 81 values, so reading
//! any row, column or block is a plain array access.
//!
//! ## Example
//!
//! ```
//! use sudoku_grid::{Digit, Grid};
//!
//! let puzzle = "\
//! 034678912
//! 672195348
//! 198342567
//! 859761423
//! 426853791
//! 713924856
//! 961537284
//! 287419635
//! 345286179";
//!
//! let mut grid: Grid = puzzle.parse().unwrap();
//!
//! // The only empty cell is (0, 0) and only a 5 fits there.
//! let (x, y) = grid.next_empty().unwrap();
//! assert_eq!((x, y), (0, 0));
//! let digit = grid.options_at(x, y).unique().unwrap();
//! assert_eq!(digit, Digit::new(5));
//!
//! grid.place(digit, x, y);
//! assert!(grid.is_solved());
//! println!("{}", grid);
//! ```

mod digit;
mod digit_set;
mod grid;
mod loader;
mod positions;

/// Contains errors for grid construction, parsing and loading
pub mod errors;

pub use crate::digit::Digit;
pub use crate::digit_set::DigitSet;
pub use crate::grid::Grid;
pub use crate::loader::load_from_file;

use crate::digit::Digit;
use crate::digit_set::DigitSet;
use crate::errors::{FromValuesError, InvalidEntry, ParseError};
use crate::positions::{block_of, cell_of_block_slot, slot_of};

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The main structure exposing all the functionality of the library.
///
/// A `Grid` stores the same 81 cell values three times, once under each of
/// the row, column and block indexings, so that the values of any row, column
/// or block can be read without gathering. All mutations go through a single
/// internal write that updates the three views together; no caller can
/// observe them disagreeing.
///
/// On top of the views, a `Grid` carries the list of cells that were empty at
/// construction time and a cursor into it, so a backtracking solver can ask
/// for the next cell to fill in O(1). The cursor contract is strictly LIFO:
/// place into the cell returned by [`next_empty`](Grid::next_empty), and on
/// backtrack unplace the most recent placement. Placing or unplacing out of
/// that order leaves the cursor pointing at the wrong cell — use
/// [`empty_positions`](Grid::empty_positions) instead if you need
/// order-independent enumeration.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Grid {
    /// Values indexed `[row][col]`
    rows: [[u8; 9]; 9],
    /// The same values indexed `[col][row]`
    cols: [[u8; 9]; 9],
    /// The same values indexed `[block][slot]`
    blocks: [[u8; 9]; 9],
    /// `(row, col)` of every cell that was 0 at construction, in column-major
    /// scan order. Never mutated afterwards.
    empties: Vec<(u8, u8)>,
    /// Net number of placements since construction, index into `empties`
    placed: usize,
}

impl Grid {
    /// Creates a new grid from 9 rows of 9 cell values, `0` marking an empty
    /// cell. Returns an error if any value is greater than 9.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Grid, FromValuesError> {
        if rows.iter().flatten().any(|&val| val > 9) {
            return Err(FromValuesError(()));
        }
        Ok(Grid::with_views(rows))
    }

    // Derives the column and block views and the empty cell list. `rows` must
    // already be validated.
    fn with_views(rows: [[u8; 9]; 9]) -> Grid {
        let mut cols = [[0; 9]; 9];
        for (y, row) in rows.iter().enumerate() {
            for (x, &val) in row.iter().enumerate() {
                cols[x][y] = val;
            }
        }

        let mut blocks = [[0; 9]; 9];
        for block in 0..9 {
            for slot in 0..9 {
                let (x, y) = cell_of_block_slot(block, slot);
                blocks[block as usize][slot as usize] = rows[y as usize][x as usize];
            }
        }

        // column-major scan; this exact order is what the solver cursor
        // walks, so it must stay reproducible
        let mut empties = Vec::new();
        for x in 0..9 {
            for y in 0..9 {
                if rows[y][x] == 0 {
                    empties.push((y as u8, x as u8));
                }
            }
        }

        Grid {
            rows,
            cols,
            blocks,
            empties,
            placed: 0,
        }
    }

    // The single point through which every mutation goes. Writes all three
    // views; the grid is never observable in between.
    fn set_cell(&mut self, x: u8, y: u8, val: u8) {
        self.rows[y as usize][x as usize] = val;
        self.cols[x as usize][y as usize] = val;
        self.blocks[block_of(x, y) as usize][slot_of(x, y) as usize] = val;
    }

    /// Places `digit` at `(x, y)` and advances the solver cursor.
    ///
    /// The cell is overwritten unconditionally; legality is the caller's
    /// business (see [`options_at`](Grid::options_at)). For the cursor to
    /// stay meaningful, `(x, y)` must be the cell currently returned by
    /// [`next_empty`](Grid::next_empty).
    ///
    /// # Panic
    /// Panics, if `x` or `y` is not in the range of `0..=8`.
    pub fn place(&mut self, digit: Digit, x: u8, y: u8) {
        self.set_cell(x, y, digit.get());
        self.placed += 1;
    }

    /// Removes the digit at `(x, y)` and rewinds the solver cursor.
    ///
    /// Symmetric to [`place`](Grid::place): only the most recent outstanding
    /// placement may be unplaced for the cursor to stay meaningful, and
    /// unplacing with no placement outstanding is a protocol violation.
    ///
    /// # Panic
    /// Panics, if `x` or `y` is not in the range of `0..=8`.
    pub fn unplace(&mut self, x: u8, y: u8) {
        self.set_cell(x, y, 0);
        self.placed -= 1;
    }

    /// Returns the digit at `(x, y)`, or `None` if the cell is empty.
    ///
    /// # Panic
    /// Panics, if `x` or `y` is not in the range of `0..=8`.
    pub fn value_at(&self, x: u8, y: u8) -> Option<Digit> {
        Digit::new_checked(self.rows[y as usize][x as usize])
    }

    /// Returns the set of digits legal at `(x, y)` under row, column and
    /// block exclusion.
    ///
    /// This is a local check only: a digit being an option does not mean the
    /// puzzle remains solvable after placing it.
    ///
    /// # Panic
    /// Panics, if `x` or `y` is not in the range of `0..=8`.
    pub fn options_at(&self, x: u8, y: u8) -> DigitSet {
        let taken = occupied(self.row_values(y))
            | occupied(self.column_values(x))
            | occupied(self.block_values(block_of(x, y)));
        DigitSet::ALL.without(taken)
    }

    /// Returns the `(x, y)` of the empty cell the solver cursor points at,
    /// or `None` once every originally-empty cell has a placement.
    ///
    /// This is an O(1) cursor read over the fixed enumeration returned by
    /// [`empty_cells`](Grid::empty_cells), not a search of the grid.
    pub fn next_empty(&self) -> Option<(u8, u8)> {
        self.empties.get(self.placed).map(|&(row, col)| (col, row))
    }

    /// Returns the cells that were empty at construction as `(row, col)`
    /// pairs, in column-major scan order (leftmost column top to bottom
    /// first). The list is fixed for the lifetime of the grid; later
    /// placements don't shrink it.
    pub fn empty_cells(&self) -> &[(u8, u8)] {
        &self.empties
    }

    /// Returns an iterator over the `(x, y)` of every cell that is empty
    /// right now, in column-major scan order.
    ///
    /// Unlike the [`next_empty`](Grid::next_empty) cursor this rescans the
    /// grid and is correct under any placement order.
    pub fn empty_positions(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..9)
            .flat_map(|x| (0..9).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.rows[y as usize][x as usize] == 0)
    }

    /// Returns the 9 values of the `i`-th row, leftmost column first.
    ///
    /// # Panic
    /// Panics, if `i` is not in the range of `0..=8`.
    pub fn row_values(&self, i: u8) -> &[u8; 9] {
        &self.rows[i as usize]
    }

    /// Returns the 9 values of the `i`-th column, topmost row first.
    ///
    /// # Panic
    /// Panics, if `i` is not in the range of `0..=8`.
    pub fn column_values(&self, i: u8) -> &[u8; 9] {
        &self.cols[i as usize]
    }

    /// Returns the 9 values of the `i`-th block, in slot order.
    ///
    /// # Panic
    /// Panics, if `i` is not in the range of `0..=8`.
    pub fn block_values(&self, i: u8) -> &[u8; 9] {
        &self.blocks[i as usize]
    }

    /// Checks whether every row, column and block contains each of the
    /// digits 1 through 9 exactly once.
    ///
    /// This is a global check over the views; it does not consult the solver
    /// cursor.
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            occupied(self.row_values(i)).is_full()
                && occupied(self.column_values(i)).is_full()
                && occupied(self.block_values(i)).is_full()
        })
    }
}

// Set of digits present among 9 cell values. Zeros carry no digit and drop
// out, so a full set over 9 cells also means no duplicates.
fn occupied(values: &[u8; 9]) -> DigitSet {
    values
        .iter()
        .filter_map(|&val| Digit::new_checked(val))
        .collect()
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Parses 9 lines of 9 digit characters, `'0'` marking an empty cell.
    /// Commas are stripped before validation; trailing whitespace-only lines
    /// are permitted.
    fn from_str(s: &str) -> Result<Grid, ParseError> {
        let mut rows = [[0; 9]; 9];
        let mut n_rows = 0u8;

        for line in s.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if n_rows == 9 {
                return Err(ParseError::TooManyRows);
            }

            let mut n_cells = 0u8;
            for ch in line.chars().filter(|&c| c != ',') {
                if n_cells == 9 {
                    return Err(ParseError::InvalidLineLength(n_rows));
                }
                let cell = n_rows * 9 + n_cells;
                rows[n_rows as usize][n_cells as usize] = match ch {
                    '0' => 0,
                    _ => Digit::try_from(ch)
                        .map_err(|()| ParseError::InvalidEntry(InvalidEntry { cell, ch }))?
                        .get(),
                };
                n_cells += 1;
            }
            if n_cells != 9 {
                return Err(ParseError::InvalidLineLength(n_rows));
            }
            n_rows += 1;
        }

        if n_rows < 9 {
            return Err(ParseError::NotEnoughRows(n_rows));
        }
        Ok(Grid::with_views(rows))
    }
}

impl fmt::Display for Grid {
    /// 9 rows of 9 digit characters separated by newlines, no trailing
    /// newline. Parsing this back yields an equal grid.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y != 0 {
                writeln!(f)?;
            }
            for &val in row {
                write!(f, "{}", val)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // blanks at (x=0, y=0), (x=3, y=0), (x=0, y=4), (x=8, y=8)
    const PUZZLE: &str = "\
034078912
672195348
198342567
859761423
026853791
713924856
961537284
287419635
345286170";

    #[test]
    fn views_agree_after_construction() {
        let grid: Grid = PUZZLE.parse().unwrap();
        for y in 0..9 {
            for x in 0..9 {
                let from_row = grid.row_values(y)[x as usize];
                let from_col = grid.column_values(x)[y as usize];
                let from_block = grid.block_values(block_of(x, y))[slot_of(x, y) as usize];
                assert_eq!(from_row, from_col);
                assert_eq!(from_row, from_block);
                assert_eq!(grid.value_at(x, y).map_or(0, Digit::get), from_row);
            }
        }
    }

    #[test]
    fn views_agree_after_mutation() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        grid.place(Digit::new(5), 0, 0);
        assert_eq!(grid.row_values(0)[0], 5);
        assert_eq!(grid.column_values(0)[0], 5);
        assert_eq!(grid.block_values(0)[0], 5);

        grid.unplace(0, 0);
        assert_eq!(grid.row_values(0)[0], 0);
        assert_eq!(grid.column_values(0)[0], 0);
        assert_eq!(grid.block_values(0)[0], 0);
    }

    #[test]
    fn empty_cells_are_column_major_row_col_pairs() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid.empty_cells(), [(0, 0), (4, 0), (0, 3), (8, 8)]);
    }

    #[test]
    fn empty_cells_do_not_shrink_on_place() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        grid.place(Digit::new(5), 0, 0);
        assert_eq!(grid.empty_cells().len(), 4);
    }

    #[test]
    fn cursor_walks_enumeration_in_order() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid.next_empty(), Some((0, 0)));
        grid.place(Digit::new(5), 0, 0);
        assert_eq!(grid.next_empty(), Some((0, 4)));
        grid.place(Digit::new(4), 0, 4);
        assert_eq!(grid.next_empty(), Some((3, 0)));
        grid.unplace(0, 4);
        assert_eq!(grid.next_empty(), Some((0, 4)));
    }

    #[test]
    fn cursor_exhausts() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        grid.place(Digit::new(5), 0, 0);
        grid.place(Digit::new(4), 0, 4);
        grid.place(Digit::new(6), 3, 0);
        grid.place(Digit::new(9), 8, 8);
        assert_eq!(grid.next_empty(), None);
        assert!(grid.is_solved());
    }

    #[test]
    fn live_scan_tracks_current_state() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        // out-of-order placement invalidates the cursor, not the live scan
        grid.place(Digit::new(9), 8, 8);
        let empty: Vec<_> = grid.empty_positions().collect();
        assert_eq!(empty, [(0, 0), (0, 4), (3, 0)]);
    }

    #[test]
    fn from_rows_rejects_out_of_range_values() {
        let mut rows = [[0; 9]; 9];
        rows[4][7] = 10;
        assert!(Grid::from_rows(rows).is_err());
    }

    #[test]
    #[should_panic]
    fn out_of_range_coordinates_panic() {
        let grid: Grid = PUZZLE.parse().unwrap();
        grid.value_at(9, 0);
    }
}

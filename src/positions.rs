//! Index remapping between the row, column and block coordinate systems.
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row, both `0..=8`.
//! Blocks are the nine 3x3 subgrids, numbered left to right, top to bottom:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Within a block, slots are numbered the same way.

/// Block index of the cell at `(x, y)`.
#[inline(always)]
pub(crate) fn block_of(x: u8, y: u8) -> u8 {
    x / 3 + (y / 3) * 3
}

/// Slot of the cell at `(x, y)` within its block.
#[inline(always)]
pub(crate) fn slot_of(x: u8, y: u8) -> u8 {
    x % 3 + (y % 3) * 3
}

/// Inverse mapping: the `(x, y)` of a block slot.
#[inline(always)]
pub(crate) fn cell_of_block_slot(block: u8, slot: u8) -> (u8, u8) {
    let x = (block % 3) * 3 + slot % 3;
    let y = (block / 3) * 3 + slot / 3;
    (x, y)
}

//! Fixed-size bitset of digits
//!
//! Membership queries over rows, columns and blocks deal with sets of
//! [`Digit`s](crate::Digit) a lot. Efficient storage is important for maximal
//! performance, but it should not be possible to confuse the bitmask with a
//! plain integer. This module contains a type-safe, space-efficient set of
//! the nine digits.

use crate::digit::Digit;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Set of the digits 1 through 9, backed by a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

/// Iterator over the digits contained in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iter(u16);

impl DigitSet {
    /// Set containing all nine digits
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set
    pub const NONE: DigitSet = DigitSet(0);

    /// Inserts `digit` into the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= digit.as_mask();
    }

    /// Deletes `digit` from the set, if present.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.as_mask();
    }

    /// Checks if `digit` is contained in the set.
    pub fn contains(&self, digit: Digit) -> bool {
        self.0 & digit.as_mask() != 0
    }

    /// Returns the set of digits in this set, that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Returns the number of digits in this set.
    pub fn len(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains any digit.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks whether this set contains all nine digits.
    pub fn is_full(&self) -> bool {
        *self == Self::ALL
    }

    /// Returns the only digit in this set, iff exactly 1 digit exists.
    pub fn unique(self) -> Option<Digit> {
        match self.len() {
            1 => self.into_iter().next(),
            _ => None,
        }
    }
}

impl Digit {
    fn as_mask(self) -> u16 {
        1 << self.as_index() as u8
    }

    /// Returns a `DigitSet` containing only this digit.
    pub fn as_set(self) -> DigitSet {
        DigitSet(self.as_mask())
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, other: Self) -> Self {
        DigitSet(self.0 & other.0)
    }
}

impl BitOrAssign for DigitSet {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAndAssign for DigitSet {
    #[inline(always)]
    fn bitand_assign(&mut self, other: Self) {
        self.0 &= other.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(digits: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in digits {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        debug_assert!(self.0 <= DigitSet::ALL.0, "{:o}", self.0);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Digit::from_index(bit_pos))
    }
}

//! Bit level helpers for status registers and NOR flash contents.

use core::ops::BitOr;

/// Queries single bits of a register value.
pub trait BitFlags {
    fn is_set(&self, bit: u8) -> bool;
    fn is_clear(&self, bit: u8) -> bool { !self.is_set(bit) }
}

impl<U: Copy + Into<u32>> BitFlags for U {
    fn is_set(&self, bit: u8) -> bool { bit < 32 && ((*self).into() >> bit) & 1 == 1 }
}

/// NOR programming can only turn ones into zeroes, so a write is only
/// possible when the new bytes are a bit subset of what is stored.
pub trait SliceBitSubset {
    fn is_subset_of(self, stored: Self) -> bool;
}

impl<T: Copy + BitOr<Output = T> + PartialEq> SliceBitSubset for &[T] {
    fn is_subset_of(self, stored: Self) -> bool {
        self.len() <= stored.len() && self.iter().zip(stored).all(|(&new, &old)| (new | old) == old)
    }
}

//! Sparse Word Memory.
//!
//! Memory is an ordered map from 32-bit word address to 32-bit value. Only
//! written locations consume storage; every other address reads as zero.
//! Addresses are keys, not byte offsets: the loader places instruction `i` at
//! address `4 * i`, while data instructions may use any address.

use std::collections::BTreeMap;

/// Sparse address-to-word memory with default-zero reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<u32, u32>,
}

impl Memory {
    /// Creates an empty memory where every address reads as zero.
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    ///
    /// Reading never allocates.
    #[inline]
    pub fn read(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `val` at `addr`.
    #[inline]
    pub fn write(&mut self, addr: u32, val: u32) {
        let _ = self.words.insert(addr, val);
    }

    /// Returns the number of addresses that have been written.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates written locations in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words.iter().map(|(&a, &v)| (a, v))
    }

    /// Iterates written locations at or above `base`, in ascending order.
    pub fn iter_from(&self, base: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words.range(base..).map(|(&a, &v)| (a, v))
    }
}

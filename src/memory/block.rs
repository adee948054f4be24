/*!
 * Memory Block
 * Value type describing one contiguous address range
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open address range `[address, address + size)`
///
/// Equality is by value: two blocks are equal when both the base address and
/// the size match. Sequences rely on this to locate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub address: Address,
    pub size: Size,
}

impl Block {
    pub const fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }

    /// Exclusive end of the range, saturating at `usize::MAX`
    #[inline]
    pub const fn end(&self) -> Address {
        self.address.saturating_add(self.size)
    }

    #[inline]
    pub const fn contains(&self, address: Address) -> bool {
        address >= self.address && address < self.end()
    }

    /// True when `other` starts exactly where this block ends
    #[inline]
    pub const fn is_adjacent_to(&self, other: &Block) -> bool {
        self.end() == other.address
    }

    pub const fn overlaps(&self, other: &Block) -> bool {
        self.address < other.end() && other.address < self.end()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.address, self.size)
    }
}

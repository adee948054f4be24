/*!
 * Memory Traits
 * Allocator abstractions
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Memory allocator interface
pub trait Allocator {
    /// Reserve `size` bytes, returning the base address
    fn allocate(&mut self, size: Size) -> MemoryResult<Address>;

    /// Return a previously allocated block to the free list
    fn release(&mut self, address: Address) -> MemoryResult<()>;

    /// Merge address-contiguous free ranges, returning the number of merges
    fn compact(&mut self) -> usize;

    /// Check if an address is the base of a live allocation
    fn is_allocated(&self, address: Address) -> bool;

    /// Get the size of an allocated block
    fn block_size(&self, address: Address) -> Option<Size>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (stats.total_memory, stats.used_memory, stats.available_memory)
    }

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}

/*!
 * Memory Space Allocator
 * First-fit allocation and release
 */

use super::MemorySpace;
use crate::core::limits::MEDIUM_PRESSURE_THRESHOLD;
use crate::core::types::{Address, Size};
use crate::memory::block::Block;
use crate::memory::sequence::Entry;
use crate::memory::traits::Allocator;
use crate::memory::types::{MemoryError, MemoryPressure, MemoryResult, SequenceError};
use log::{debug, warn};

impl MemorySpace {
    /// Allocate `size` bytes from the first free block that fits
    ///
    /// The free list is scanned in list order. The chosen block gives up its
    /// low `size` bytes and is dropped from the free list once empty.
    /// `MemoryError::NoFit` is the ordinary "nothing fits" outcome; callers
    /// may `compact()` and retry.
    pub fn allocate(&mut self, size: Size) -> MemoryResult<Address> {
        if size == 0 {
            return Err(MemoryError::InvalidSize(size));
        }

        let chosen = self
            .free
            .iter()
            .find(|entry| entry.block().size >= size)
            .map(Entry::id);

        let Some(id) = chosen else {
            let largest_free = self.largest_free_block();
            debug!(
                "No free block fits {} bytes (largest: {}, {} free blocks)",
                size,
                largest_free,
                self.free.len()
            );
            return Err(MemoryError::NoFit {
                requested: size,
                largest_free,
            });
        };

        let (address, exhausted) = {
            let block = self
                .free
                .block_mut(id)
                .ok_or_else(|| SequenceError::stale_entry(id))?;
            let address = block.address;

            self.allocated.push_back(Block::new(address, size));
            block.address += size;
            block.size -= size;

            (address, block.size == 0)
        };

        if exhausted {
            self.free.remove_entry(id)?;
        }
        self.used_memory += size;

        match self.pressure_warning() {
            Some(level) => warn!(
                "Memory pressure {}: allocated {} bytes at 0x{:x} ({:.1}% used: {} / {})",
                level,
                size,
                address,
                self.usage_ratio() * 100.0,
                self.used_memory,
                self.total_size
            ),
            None => debug!(
                "Allocated {} bytes at 0x{:x} ({} free blocks remain)",
                size,
                address,
                self.free.len()
            ),
        }

        Ok(address)
    }

    /// Move the allocation based at `address` back to the free list
    ///
    /// Unknown addresses are rejected with `MemoryError::InvalidAddress` and
    /// leave both lists untouched. The released block is appended unmerged;
    /// coalescing waits for `compact()` or the auto-compact interval.
    pub fn release(&mut self, address: Address) -> MemoryResult<()> {
        let found = self
            .allocated
            .iter()
            .find(|entry| entry.block().address == address)
            .map(|entry| (entry.id(), *entry.block()));

        let Some((id, block)) = found else {
            warn!(
                "Attempted to release invalid or already released address: 0x{:x}",
                address
            );
            return Err(MemoryError::InvalidAddress(address));
        };

        self.allocated.remove_entry(id)?;
        self.free.push_back(block);
        self.used_memory -= block.size;
        self.releases_since_compact += 1;

        debug!(
            "Released {} bytes at 0x{:x} ({} bytes now available, {} free blocks)",
            block.size,
            address,
            self.total_size - self.used_memory,
            self.free.len()
        );

        if let Some(interval) = self.config.auto_compact_interval {
            if self.releases_since_compact >= interval {
                debug!("Auto-compact interval of {} releases reached", interval);
                self.compact();
            }
        }

        Ok(())
    }

    /// Check if `address` is the base of a live allocation
    pub fn is_allocated(&self, address: Address) -> bool {
        self.block_size(address).is_some()
    }

    /// Size of the allocation based at `address`
    pub fn block_size(&self, address: Address) -> Option<Size> {
        self.allocated
            .blocks()
            .find(|block| block.address == address)
            .map(|block| block.size)
    }

    pub(super) fn usage_ratio(&self) -> f64 {
        self.used_memory as f64 / self.total_size as f64
    }

    /// Current pressure when it is High or Critical
    fn pressure_warning(&self) -> Option<MemoryPressure> {
        self.check_memory_pressure(self.used_memory)
            .filter(|level| *level >= MemoryPressure::High)
    }

    /// Pressure level for `used` bytes, `None` below the medium threshold
    pub(super) fn check_memory_pressure(&self, used: Size) -> Option<MemoryPressure> {
        let usage_ratio = used as f64 / self.total_size as f64;

        if usage_ratio >= self.config.critical_threshold {
            Some(MemoryPressure::Critical)
        } else if usage_ratio >= self.config.warning_threshold {
            Some(MemoryPressure::High)
        } else if usage_ratio >= MEDIUM_PRESSURE_THRESHOLD {
            Some(MemoryPressure::Medium)
        } else {
            None
        }
    }
}

impl Allocator for MemorySpace {
    fn allocate(&mut self, size: Size) -> MemoryResult<Address> {
        MemorySpace::allocate(self, size)
    }

    fn release(&mut self, address: Address) -> MemoryResult<()> {
        MemorySpace::release(self, address)
    }

    fn compact(&mut self) -> usize {
        MemorySpace::compact(self)
    }

    fn is_allocated(&self, address: Address) -> bool {
        MemorySpace::is_allocated(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        MemorySpace::block_size(self, address)
    }
}

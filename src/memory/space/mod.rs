/*!
 * Memory Space
 *
 * Simulated heap over a fixed-size arena.
 *
 * ## Model
 *
 * Two block sequences partition the arena:
 * - **free**: ranges available for allocation, in list order
 * - **allocated**: live allocations, in allocation order
 *
 * Together they tile `[0, total_size)` without overlap.
 *
 * ## Operations
 *
 * - **First fit**: `allocate` takes the first free block (in list order, not
 *   address order) large enough for the request
 * - **Block splitting**: the chosen free block shrinks in place; it is removed
 *   once fully consumed
 * - **Release**: the block moves back to the tail of the free list as is
 * - **Coalescing**: `compact` sorts the free list by address and merges
 *   contiguous neighbours in one forward pass
 *
 * A `MemorySpace` is single-threaded. Use [`SharedMemorySpace`] when several
 * callers need the same arena.
 */

mod allocator;
mod compact;
mod shared;
mod stats;

pub use shared::SharedMemorySpace;

use super::block::Block;
use super::sequence::Sequence;
use super::types::MemoryResult;
use crate::core::config::MemorySpaceConfig;
use crate::core::types::Size;
use log::info;
use std::fmt;

/// Memory space
#[derive(Debug, Clone)]
pub struct MemorySpace {
    free: Sequence,
    allocated: Sequence,
    total_size: Size,
    used_memory: Size,
    releases_since_compact: u64,
    config: MemorySpaceConfig,
}

impl MemorySpace {
    /// Create a space of `total_size` bytes with default thresholds
    pub fn new(total_size: Size) -> MemoryResult<Self> {
        Self::with_config(MemorySpaceConfig::new().with_total_size(total_size))
    }

    pub fn with_config(config: MemorySpaceConfig) -> MemoryResult<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: MemorySpaceConfig) -> Self {
        let total_size = config.total_size;
        let mut free = Sequence::new();
        free.push_back(Block::new(0, total_size));

        info!(
            "Memory space initialized with {} bytes (first-fit, auto-compact: {:?})",
            total_size, config.auto_compact_interval
        );

        Self {
            free,
            allocated: Sequence::new(),
            total_size,
            used_memory: 0,
            releases_since_compact: 0,
            config,
        }
    }

    #[inline]
    pub fn total_size(&self) -> Size {
        self.total_size
    }

    /// Free ranges in list order
    pub fn free_blocks(&self) -> &Sequence {
        &self.free
    }

    /// Live allocations in allocation order
    pub fn allocated_blocks(&self) -> &Sequence {
        &self.allocated
    }

    pub fn config(&self) -> &MemorySpaceConfig {
        &self.config
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::seeded(MemorySpaceConfig::default())
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.free)?;
        write!(f, "{}", self.allocated)
    }
}

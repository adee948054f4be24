/*!
 * Memory Space Statistics
 * Usage reporting and consistency checks
 */

use super::MemorySpace;
use crate::core::types::Size;
use crate::memory::block::Block;
use crate::memory::traits::MemoryInfo;
use crate::memory::types::{MemoryError, MemoryPressure, MemoryResult, MemoryStats};

impl MemorySpace {
    pub fn stats(&self) -> MemoryStats {
        let available_memory = self.total_size - self.used_memory;
        let largest_free_block = self.largest_free_block();
        let fragmentation = if available_memory == 0 {
            0.0
        } else {
            1.0 - largest_free_block as f64 / available_memory as f64
        };

        MemoryStats {
            total_memory: self.total_size,
            used_memory: self.used_memory,
            available_memory,
            usage_percentage: self.usage_ratio() * 100.0,
            allocated_blocks: self.allocated.len(),
            free_blocks: self.free.len(),
            largest_free_block,
            fragmentation,
            warning_threshold: self.config.warning_threshold,
            critical_threshold: self.config.critical_threshold,
        }
    }

    /// Pressure level using this space's configured thresholds
    pub fn pressure(&self) -> MemoryPressure {
        self.check_memory_pressure(self.used_memory)
            .unwrap_or(MemoryPressure::Low)
    }

    pub fn largest_free_block(&self) -> Size {
        self.free.blocks().map(|block| block.size).max().unwrap_or(0)
    }

    /// Verify that free and allocated blocks tile `[0, total_size)` exactly
    ///
    /// Reports the first address where a gap, an overlap or an empty block is
    /// found.
    pub fn check_invariants(&self) -> MemoryResult<()> {
        let mut blocks: Vec<Block> = self.free.blocks().chain(self.allocated.blocks()).collect();
        blocks.sort_by_key(|block| block.address);

        let mut expected = 0;
        for block in &blocks {
            if block.size == 0 || block.address != expected {
                return Err(MemoryError::CorruptionDetected(block.address.min(expected)));
            }
            expected = block.end();
        }
        if expected != self.total_size {
            return Err(MemoryError::CorruptionDetected(expected));
        }

        if self.allocated.total_size() != self.used_memory {
            return Err(MemoryError::CorruptionDetected(0));
        }

        Ok(())
    }
}

impl MemoryInfo for MemorySpace {
    fn stats(&self) -> MemoryStats {
        MemorySpace::stats(self)
    }

    fn pressure(&self) -> MemoryPressure {
        MemorySpace::pressure(self)
    }
}

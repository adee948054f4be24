/*!
 * Memory Space Compaction
 * Coalescing of address-contiguous free blocks
 */

use super::MemorySpace;
use crate::memory::sequence::Entry;
use log::{error, info};

impl MemorySpace {
    /// Merge contiguous free blocks, returning the number of merges
    ///
    /// The free list is sorted by address first, so a single forward pass
    /// collapses every run of touching blocks: after a merge the extended
    /// block is compared again with its new successor. Non-contiguous blocks
    /// are left alone apart from the reordering.
    pub fn compact(&mut self) -> usize {
        self.releases_since_compact = 0;
        if self.free.len() <= 1 {
            return 0;
        }

        let initial_count = self.free.len();
        self.free.sort();

        let mut merged = 0;
        let mut cursor = self.free.first().map(Entry::id);
        while let Some(current) = cursor {
            let Some(next) = self.free.next_of(current) else {
                break;
            };
            let (Some(current_block), Some(next_block)) =
                (self.free.block(current), self.free.block(next))
            else {
                break;
            };

            if !current_block.is_adjacent_to(&next_block) {
                cursor = Some(next);
                continue;
            }

            let absorbed = match self.free.remove_after(current) {
                Ok(block) => block,
                Err(err) => {
                    error!("Free list corrupted during compaction: {}", err);
                    break;
                }
            };
            if let Some(block) = self.free.block_mut(current) {
                block.size += absorbed.size;
            }
            merged += 1;
        }

        if merged > 0 {
            info!(
                "Coalesced {} pairs of adjacent free blocks, reduced from {} to {} blocks",
                merged,
                initial_count,
                self.free.len()
            );
        }

        merged
    }
}

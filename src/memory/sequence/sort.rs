/*!
 * Sequence Sorting
 */

use super::{Entry, EntryId, Sequence};
use crate::memory::block::Block;

impl Sequence {
    /// Sort ascending by base address
    ///
    /// Bubble sort over fixed entry positions: blocks are swapped between
    /// neighbouring entries and the links are never touched, so every handle
    /// keeps its position. Swaps happen only on a strictly greater address,
    /// which keeps equal addresses in their original relative order.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        let positions: Vec<EntryId> = self.iter().map(Entry::id).collect();
        for pass in 0..positions.len() - 1 {
            let mut swapped = false;

            for j in 0..positions.len() - pass - 1 {
                let (left, right) = (positions[j], positions[j + 1]);
                if let (Some(a), Some(b)) = (self.block(left), self.block(right)) {
                    if a.address > b.address {
                        self.swap_blocks(left, a, right, b);
                        swapped = true;
                    }
                }
            }

            if !swapped {
                break;
            }
        }
    }

    fn swap_blocks(&mut self, left: EntryId, left_block: Block, right: EntryId, right_block: Block) {
        if let Some(block) = self.block_mut(left) {
            *block = right_block;
        }
        if let Some(block) = self.block_mut(right) {
            *block = left_block;
        }
    }
}

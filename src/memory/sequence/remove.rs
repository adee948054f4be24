/*!
 * Sequence Removal
 *
 * Positional and value-based unlinking.
 *
 * Value-based removal matches on block equality, not entry identity: when
 * two entries hold equal blocks, the one found first in scan order goes,
 * whichever handle was passed to `remove_entry`.
 */

use super::{EntryId, Sequence};
use crate::memory::block::Block;
use crate::memory::types::{SequenceError, SequenceResult};

impl Sequence {
    /// Remove the first entry whose block equals the block held by `id`
    pub fn remove_entry(&mut self, id: EntryId) -> SequenceResult<Block> {
        let target = self.block(id).ok_or_else(|| SequenceError::stale_entry(id))?;
        self.remove_value(&target)
    }

    /// Remove the entry at `index`; O(1) at the head
    pub fn remove_at(&mut self, index: usize) -> SequenceResult<Block> {
        self.check_bounds(index)?;

        let out_of_range = SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index == 0 {
            let first = self.first.ok_or(out_of_range)?;
            return self.unlink(None, first);
        }

        let prev = self.locate(index - 1).ok_or(out_of_range.clone())?;
        let target = self.next_of(prev).ok_or(out_of_range)?;
        self.unlink(Some(prev), target)
    }

    /// Remove the first entry whose block equals `block`
    pub fn remove_value(&mut self, block: &Block) -> SequenceResult<Block> {
        let first = self.first.ok_or_else(SequenceError::empty)?;
        if self.block(first).as_ref() == Some(block) {
            return self.unlink(None, first);
        }

        let mut prev = first;
        while let Some(current) = self.next_of(prev) {
            if self.block(current).as_ref() == Some(block) {
                return self.unlink(Some(prev), current);
            }
            prev = current;
        }

        Err(SequenceError::NotFound(*block))
    }

    /// Unlink the successor of `id` in O(1)
    pub fn remove_after(&mut self, id: EntryId) -> SequenceResult<Block> {
        let entry = self.entry(id).ok_or_else(|| SequenceError::stale_entry(id))?;
        let target = entry.next.ok_or_else(|| {
            SequenceError::InvalidArgument(format!("entry {} has no successor", id))
        })?;
        self.unlink(Some(id), target)
    }

    fn unlink(&mut self, prev: Option<EntryId>, target: EntryId) -> SequenceResult<Block> {
        let next = self.next_of(target);
        let removed = self
            .vacate_slot(target)
            .ok_or_else(|| SequenceError::stale_entry(target))?;

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.first = next,
        }
        if self.last == Some(target) {
            self.last = prev;
        }
        self.len -= 1;

        Ok(removed.block)
    }
}

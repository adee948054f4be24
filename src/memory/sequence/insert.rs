/*!
 * Sequence Insertion
 */

use super::{EntryId, Sequence};
use crate::memory::block::Block;
use crate::memory::types::{SequenceError, SequenceResult};

impl Sequence {
    /// Insert `block` before position `index`
    ///
    /// Valid for `0 <= index <= len`. Both ends are O(1); a middle position
    /// walks to the predecessor.
    pub fn insert_at(&mut self, index: usize, block: Block) -> SequenceResult<EntryId> {
        if index > self.len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return Ok(self.push_front(block));
        }
        if index == self.len {
            return Ok(self.push_back(block));
        }

        let prev = self.locate(index - 1).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        })?;
        let next = self.next_of(prev);
        let id = self.occupy_slot(block, next);
        self.set_next(prev, Some(id));
        self.len += 1;
        Ok(id)
    }

    /// Append to the tail in O(1)
    pub fn push_back(&mut self, block: Block) -> EntryId {
        let id = self.occupy_slot(block, None);
        match self.last {
            Some(last) => self.set_next(last, Some(id)),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.len += 1;
        id
    }

    /// Prepend to the head in O(1)
    pub fn push_front(&mut self, block: Block) -> EntryId {
        let id = self.occupy_slot(block, self.first);
        self.first = Some(id);
        if self.last.is_none() {
            self.last = Some(id);
        }
        self.len += 1;
        id
    }
}

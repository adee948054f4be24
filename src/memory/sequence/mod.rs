/*!
 * Block Sequence
 *
 * Insertion-ordered, singly-linked list of memory blocks.
 *
 * ## Layout
 *
 * Entries live in a slot arena owned by the sequence and link forward by
 * handle. The sequence keeps handles to its first and last entries plus a
 * length counter:
 *
 * - The chain from `first` reaches `last` after exactly `len` entries
 * - `len == 0` iff both `first` and `last` are absent
 * - `last` never has a successor
 *
 * Vacated slots are recycled by later insertions.
 *
 * ## Cost
 *
 * - **Both ends**: O(1) access, prepend and append
 * - **Positional access / insert / remove**: O(index)
 * - **Value lookup and removal**: O(position of the match)
 * - **Sort**: O(len²) payload-swapping bubble sort
 */

mod entry;
mod insert;
mod iter;
mod remove;
mod sort;

pub use entry::{Entry, EntryId};
pub use iter::{Blocks, Iter};

use super::block::Block;
use super::types::{SequenceError, SequenceResult};
use crate::core::limits::DEFAULT_SEQUENCE_CAPACITY;
use crate::core::types::Size;
use entry::Slot;
use std::fmt;

/// Ordered container of blocks
#[derive(Debug, Clone)]
pub struct Sequence {
    slots: Vec<Slot>,
    vacant: Vec<usize>,
    first: Option<EntryId>,
    last: Option<EntryId>,
    len: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SEQUENCE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<&Entry> {
        self.first.and_then(|id| self.entry(id))
    }

    pub fn last(&self) -> Option<&Entry> {
        self.last.and_then(|id| self.entry(id))
    }

    /// Resolve a handle; `None` if it is stale or from another sequence
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    pub fn block(&self, id: EntryId) -> Option<Block> {
        self.entry(id).map(|entry| entry.block)
    }

    /// Mutable access to an entry's payload; links are not reachable here
    pub fn block_mut(&mut self, id: EntryId) -> Option<&mut Block> {
        self.entry_mut(id).map(|entry| &mut entry.block)
    }

    pub fn next_of(&self, id: EntryId) -> Option<EntryId> {
        self.entry(id).and_then(|entry| entry.next)
    }

    pub fn entry_at(&self, index: usize) -> SequenceResult<&Entry> {
        self.check_bounds(index)?;
        self.locate(index)
            .and_then(|id| self.entry(id))
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn block_at(&self, index: usize) -> SequenceResult<Block> {
        self.entry_at(index).map(|entry| entry.block)
    }

    /// Position of the first entry whose block equals `block`
    pub fn index_of(&self, block: &Block) -> Option<usize> {
        self.iter().position(|entry| entry.block == *block)
    }

    pub fn contains(&self, block: &Block) -> bool {
        self.index_of(block).is_some()
    }

    /// Sum of all block sizes
    pub fn total_size(&self) -> Size {
        self.blocks().map(|block| block.size).sum()
    }

    pub fn to_vec(&self) -> Vec<Block> {
        self.blocks().collect()
    }

    /// Remove every entry; handles issued before the clear stay stale
    pub fn clear(&mut self) {
        self.vacant.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.vacant.push(index);
        }
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    fn set_next(&mut self, id: EntryId, next: Option<EntryId>) {
        if let Some(entry) = self.entry_mut(id) {
            entry.next = next;
        }
    }

    fn check_bounds(&self, index: usize) -> SequenceResult<()> {
        if index >= self.len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Walk `index` links from `first`
    fn locate(&self, index: usize) -> Option<EntryId> {
        let mut cursor = self.first;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.next_of(id));
        }
        cursor
    }

    fn occupy_slot(&mut self, block: Block, next: Option<EntryId>) -> EntryId {
        match self.vacant.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                let id = EntryId {
                    index,
                    generation: slot.generation,
                };
                slot.entry = Some(Entry { id, block, next });
                id
            }
            None => {
                let id = EntryId {
                    index: self.slots.len(),
                    generation: 0,
                };
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(Entry { id, block, next }),
                });
                id
            }
        }
    }

    fn vacate_slot(&mut self, id: EntryId) -> Option<Entry> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(id.index);
        Some(entry)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Block> for Sequence {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl Extend<Block> for Sequence {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        for block in iter {
            self.push_back(block);
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for block in self.blocks() {
            write!(f, "{}{}", separator, block)?;
            separator = " ";
        }
        Ok(())
    }
}

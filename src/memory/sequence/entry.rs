/*!
 * Sequence Entries
 * List nodes and the generational handles that address them
 */

use crate::memory::block::Block;
use std::fmt;

/// Handle to an entry inside one sequence
///
/// The generation changes every time a slot is vacated, so a handle to a
/// removed entry never resolves to a later occupant of the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    pub(super) index: usize,
    pub(super) generation: u32,
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// List node: one block plus the forward link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(super) id: EntryId,
    pub(super) block: Block,
    pub(super) next: Option<EntryId>,
}

impl Entry {
    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[inline]
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Successor handle, `None` for the last entry
    #[inline]
    pub fn next(&self) -> Option<EntryId> {
        self.next
    }
}

/// Arena slot; vacant when `entry` is `None`
#[derive(Debug, Clone)]
pub(super) struct Slot {
    pub(super) generation: u32,
    pub(super) entry: Option<Entry>,
}

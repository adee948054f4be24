/*!
 * Sequence Iteration
 * Lazy forward traversal from the first entry
 */

use super::{Entry, EntryId, Sequence};
use crate::memory::block::Block;
use std::iter::FusedIterator;

/// Forward iterator over entries
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    sequence: &'a Sequence,
    cursor: Option<EntryId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.sequence.entry(self.cursor?)?;
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Forward iterator over block values
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    inner: Iter<'a>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}

impl Sequence {
    /// Start a fresh traversal from the first entry
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: self,
            cursor: self.first,
            remaining: self.len,
        }
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks { inner: self.iter() }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! The per-iteration cursor over a [`Slices`](crate::Slices) container.

use std::iter::FusedIterator;

use crate::range::SliceRange;

/// A lazy cursor yielding one resolved sub-slice per stored range.
///
/// Each cursor owns its own position counter, so independent cursors over the
/// same container never interfere. The iterator is finite (bounded by the
/// number of stored ranges), reports an exact size, and is fused.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    data: &'a [T],
    ranges: &'a [SliceRange],
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(data: &'a [T], ranges: &'a [SliceRange]) -> Self {
        Self {
            data,
            ranges,
            pos: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.get(self.pos)?;
        self.pos += 1;
        Some(&self.data[range.resolve(self.data.len())])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ranges.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

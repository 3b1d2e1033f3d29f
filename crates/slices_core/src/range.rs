//! Half-open index ranges with slice-style normalization.
//!
//! This module provides the [`SliceRange`] type, a `(start, end)` pair of signed
//! bounds denoting the half-open region `[start, end)` of some backing sequence.
//!
//! # Design Rationale
//!
//! Unlike a validated span type, a `SliceRange` accepts *any* pair of bounds at
//! construction time: inverted pairs, bounds past the end of the backing
//! sequence, and negative bounds are all representable. Nothing is checked
//! until [`SliceRange::resolve`] normalizes the pair against a concrete
//! backing length, at which point:
//!
//! - a negative bound counts back from the end, saturating at 0;
//! - a positive bound is clamped to the backing length;
//! - an inverted pair (normalized start past normalized end) collapses to an
//!   empty range rather than failing.
//!
//! The range returned by `resolve` is always in bounds for a slice of the
//! given length, so it can be used to index without panicking. Degenerate
//! input produces an empty or truncated slice, never an error.

use std::ops::Range;

/// A half-open `[start, end)` pair of signed bounds over a backing sequence.
///
/// Ranges are cheap to copy and carry no validity guarantees of their own;
/// all clamping happens in [`SliceRange::resolve`].
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct SliceRange {
    start: isize,
    end: isize,
}

impl SliceRange {
    /// Creates a new range from a start and end bound.
    ///
    /// No validation is performed: inverted, out-of-bounds, and negative
    /// bounds are all accepted and only take effect at resolution time.
    #[inline]
    pub const fn new(start: isize, end: isize) -> Self {
        Self { start, end }
    }

    /// Returns the start bound as given at construction.
    #[inline]
    pub const fn start(&self) -> isize {
        self.start
    }

    /// Returns the end bound as given at construction.
    #[inline]
    pub const fn end(&self) -> isize {
        self.end
    }

    /// Normalizes this range against a backing sequence of length `len`.
    ///
    /// Negative bounds count back from `len` (saturating at 0), positive
    /// bounds are clamped to `len`, and a start past the end collapses to the
    /// empty range `start..start`. The result is always a valid index range
    /// for a slice of length `len`.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let start = Self::normalize(self.start, len);
        let end = Self::normalize(self.end, len);
        start..end.max(start)
    }

    /// Maps one signed bound into `0..=len`.
    #[inline]
    fn normalize(bound: isize, len: usize) -> usize {
        if bound < 0 {
            len.saturating_sub(bound.unsigned_abs())
        } else {
            (bound as usize).min(len)
        }
    }
}

impl From<(isize, isize)> for SliceRange {
    #[inline]
    fn from((start, end): (isize, isize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Range<isize>> for SliceRange {
    #[inline]
    fn from(range: Range<isize>) -> Self {
        Self::new(range.start, range.end)
    }
}

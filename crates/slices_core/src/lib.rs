//! A lazily-sliced view over a backing sequence.
//!
//! This library provides the [`Slices`] container, which pairs a borrowed
//! backing slice with an ordered list of [`SliceRange`] bounds and lazily
//! yields one sub-slice per range. It is useful for:
//!
//! - Naming overlapping regions of a sequence without copying the data
//! - Driving `for` loops over a fixed set of windows in insertion order
//! - Mapping each window through a closure into an owned result sequence
//!
//! # Iteration Model
//!
//! Iteration is pull-based and restartable: every call to [`Slices::iter`]
//! produces a fresh cursor starting at the first range, and multiple live
//! cursors over the same container are independent. Ranges are resolved
//! against the backing length at yield time with clamping semantics, so
//! out-of-bounds or inverted ranges produce empty or truncated slices rather
//! than panicking.
//!
//! Because the backing data is held by shared borrow, the compiler rules out
//! mutation of the backing sequence while any `Slices` over it is alive.
//!
//! # Example
//!
//! ```
//! use slices_core::Slices;
//!
//! let pets = ["cat", "dog", "fish", "hamster", "parakeet", "sugar glider"];
//! let groups = Slices::new(&pets, [(0, 2), (2, 4), (1, 4), (3, 6)]);
//!
//! let described = groups.map(|group, _| group.join(" + "));
//! assert_eq!(described[0], "cat + dog");
//! assert_eq!(described[3], "hamster + parakeet + sugar glider");
//! ```

mod iter;
mod range;

pub use iter::Iter;
pub use range::SliceRange;

/// A container yielding sub-slices of a backing sequence, one per stored range.
///
/// The backing data is borrowed and never copied; the range list is owned and
/// its insertion order is the iteration order. Construction performs no
/// validation: any range is accepted and only clamped when a cursor reaches
/// it.
#[derive(Debug, Clone)]
pub struct Slices<'a, T> {
    /// The backing sequence sub-slices are drawn from.
    data: &'a [T],
    /// The stored ranges, in iteration order.
    ranges: Vec<SliceRange>,
}

impl<'a, T> Slices<'a, T> {
    /// Creates a new container over `data` from an ordered collection of
    /// ranges.
    ///
    /// Accepts anything convertible into [`SliceRange`], so tuples and
    /// `a..b` literals work directly:
    ///
    /// ```
    /// use slices_core::{SliceRange, Slices};
    ///
    /// let data = [1, 2, 3, 4];
    /// let a = Slices::new(&data, [(0, 2), (2, 4)]);
    /// let b = Slices::new(&data, [0..2, 2..4]);
    /// let c = Slices::new(&data, [SliceRange::new(0, 2), SliceRange::new(2, 4)]);
    /// assert_eq!(a.ranges(), b.ranges());
    /// assert_eq!(b.ranges(), c.ranges());
    /// ```
    pub fn new<I>(data: &'a [T], ranges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SliceRange>,
    {
        Self {
            data,
            ranges: ranges.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of stored ranges.
    ///
    /// This is also the exact number of sub-slices a full iteration yields.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if no ranges are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the backing sequence.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Returns the stored ranges in iteration order.
    #[inline]
    pub fn ranges(&self) -> &[SliceRange] {
        &self.ranges
    }

    /// Returns a fresh cursor over the stored ranges.
    ///
    /// Each call starts over at the first range, independent of any other
    /// cursor obtained before or after.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data, &self.ranges)
    }

    /// Drains a fresh cursor, mapping every yielded sub-slice through `f`.
    ///
    /// The closure receives each sub-slice together with the number of
    /// results produced so far, which doubles as the 0-based output position.
    /// Results are returned in range order, one per stored range. Panics
    /// raised by `f` propagate to the caller.
    pub fn map<B, F>(&self, mut f: F) -> Vec<B>
    where
        F: FnMut(&[T], usize) -> B,
    {
        let mut mapped = Vec::with_capacity(self.ranges.len());
        for slice in self.iter() {
            mapped.push(f(slice, mapped.len()));
        }
        mapped
    }
}

impl<'a, 's, T> IntoIterator for &'s Slices<'a, T> {
    type Item = &'s [T];
    type IntoIter = Iter<'s, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: [&str; 6] = ["cat", "dog", "fish", "hamster", "parakeet", "sugar glider"];

    #[test]
    fn new_collects_ranges_in_order() {
        let data = [1, 2, 3];
        let slices = Slices::new(&data, [(2, 3), (0, 1)]);

        assert_eq!(slices.len(), 2);
        assert!(!slices.is_empty());
        assert_eq!(
            slices.ranges(),
            &[SliceRange::new(2, 3), SliceRange::new(0, 1)]
        );
        assert_eq!(slices.data(), &data);
    }

    #[test]
    fn new_with_no_ranges_is_empty() {
        let data = [1, 2, 3];
        let slices = Slices::new(&data, std::iter::empty::<SliceRange>());

        assert!(slices.is_empty());
        assert_eq!(slices.len(), 0);
        assert_eq!(slices.iter().next(), None);
        assert_eq!(slices.map(|_, _| ()).len(), 0);
    }

    #[test]
    fn map_yields_one_result_per_range() {
        let slices = Slices::new(&PETS, [(0, 2), (2, 4), (1, 4), (3, 6)]);
        let lengths = slices.map(|group, _| group.len());

        assert_eq!(lengths.len(), slices.len());
        assert_eq!(lengths, vec![2, 2, 3, 3]);
    }

    #[test]
    fn map_passes_output_position() {
        let data = [10, 20, 30];
        let slices = Slices::new(&data, [(0, 1), (1, 2), (2, 3)]);

        let indices = slices.map(|_, i| i);
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn map_matches_manual_slicing() {
        let data = [5, 6, 7, 8, 9];
        let ranges = [(0, 3), (2, 5), (4, 4), (1, 100)];
        let slices = Slices::new(&data, ranges);

        let mapped = slices.map(|slice, _| slice.to_vec());
        for (i, (start, end)) in ranges.iter().enumerate() {
            let range = SliceRange::new(*start, *end);
            assert_eq!(mapped[i], data[range.resolve(data.len())].to_vec());
        }
    }

    #[test]
    fn map_is_idempotent() {
        let slices = Slices::new(&PETS, [(0, 2), (2, 4), (1, 4), (3, 6)]);

        let first = slices.map(|group, _| group.to_vec());
        let second = slices.map(|group, _| group.to_vec());
        assert_eq!(first, second);

        let drained: Vec<_> = slices.iter().collect();
        let redrained: Vec<_> = slices.iter().collect();
        assert_eq!(drained, redrained);
    }

    #[test]
    fn for_loop_consumes_by_reference() {
        let data = [1, 2, 3, 4];
        let slices = Slices::new(&data, [(0, 2), (2, 4)]);

        let mut seen = Vec::new();
        for slice in &slices {
            seen.push(slice);
        }
        assert_eq!(seen, vec![&data[0..2], &data[2..4]]);
    }

    #[test]
    fn degenerate_ranges_yield_empty_slices() {
        let data = [1, 2, 3];
        let slices = Slices::new(&data, [(2, 2), (3, 0), (7, 9)]);

        let mapped = slices.map(|slice, _| slice.len());
        assert_eq!(mapped, vec![0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_ranges_clamp_to_backing() {
        let data = [1, 2, 3];
        let slices = Slices::new(&data, [(1, 100), (0, 100)]);

        let mapped = slices.map(|slice, _| slice.to_vec());
        assert_eq!(mapped, vec![vec![2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn pet_groups_end_to_end() {
        let groups = Slices::new(&PETS, [(0, 2), (2, 4), (1, 4), (3, 6)]);
        let described = groups.map(|group, _| group.join(" + "));

        assert_eq!(
            described,
            vec![
                "cat + dog",
                "fish + hamster",
                "dog + fish + hamster",
                "hamster + parakeet + sugar glider",
            ]
        );
    }
}

//! Splitting `0..elements` into contiguous ranges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// A half-open interval: `start` is included, `end` is not.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::Range;
///
/// let range = Range::new(3, 6);
/// assert_eq!(range.start(), &3);
/// assert_eq!(range.end(), &6);
/// assert_eq!(range, Range::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T> Range<T> {
    /// Creates a range from its lower (inclusive) and upper (exclusive) bound.
    #[inline]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Returns `true` if `value` lies in the range.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialOrd,
    {
        &self.start <= value && value < &self.end
    }

    /// Splits the range into its bounds.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T> From<Range<T>> for std::ops::Range<T> {
    fn from(range: Range<T>) -> Self {
        range.start..range.end
    }
}

impl<T> From<std::ops::Range<T>> for Range<T> {
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// The layout of `elements` items over `partitions` contiguous ranges.
///
/// The first `elements % partitions` ranges hold one extra element. When
/// there are fewer elements than partitions the trailing ranges are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    partitions: usize,
    size: usize,
    remainder: usize,
}

impl Layout {
    pub(crate) fn new(operation: &'static str, elements: usize, partitions: usize) -> Result<Self> {
        if elements == 0 {
            return Err(FunctionalError::invalid_argument(
                operation,
                "the number of elements must be positive",
            ));
        }
        if partitions == 0 {
            return Err(FunctionalError::invalid_argument(
                operation,
                "the number of partitions must be positive",
            ));
        }
        Ok(Self {
            partitions,
            size: elements / partitions,
            remainder: elements % partitions,
        })
    }

    /// The lower bound of partition `index`; `bound(partitions)` is the total.
    pub(crate) fn bound(&self, index: usize) -> usize {
        index * self.size + index.min(self.remainder)
    }

    pub(crate) const fn partitions(&self) -> usize {
        self.partitions
    }
}

/// The ranges of a partitioning, each bound mapped through a generator.
///
/// Created by [`partition_ranges`](super::partition_ranges) and
/// [`partition_ranges_with`](super::partition_ranges_with).
#[derive(Debug, Clone)]
pub struct PartitionRanges<F> {
    layout: Layout,
    generator: F,
}

impl<F> PartitionRanges<F> {
    pub(crate) const fn new(layout: Layout, generator: F) -> Self {
        Self { layout, generator }
    }
}

impl<F, T> Sequence for PartitionRanges<F>
where
    F: Fn(usize) -> T,
{
    type Item = Range<T>;
    type Cursor<'a>
        = PartitionRangesCursor<'a, F>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        PartitionRangesCursor {
            layout: self.layout,
            generator: &self.generator,
            index: 0,
        }
    }
}

/// Cursor of [`PartitionRanges`].
pub struct PartitionRangesCursor<'a, F> {
    layout: Layout,
    generator: &'a F,
    index: usize,
}

impl<F, T> Cursor for PartitionRangesCursor<'_, F>
where
    F: Fn(usize) -> T,
{
    type Item = Range<T>;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.index < self.layout.partitions()
    }

    fn next_element(&mut self) -> Result<Range<T>> {
        if !self.has_next() {
            return Err(FunctionalError::exhausted("seq::partition_ranges"));
        }
        let start = self.layout.bound(self.index);
        let end = self.layout.bound(self.index + 1);
        self.index += 1;
        Ok(Range::new(
            (self.generator)(start + 1),
            (self.generator)(end + 1),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;
    use rstest::rstest;

    fn bounds(ranges: Vec<Range<usize>>) -> Vec<(usize, usize)> {
        ranges.into_iter().map(Range::into_bounds).collect()
    }

    #[rstest]
    #[case(10, 5, vec![(0, 2), (2, 4), (4, 6), (6, 8), (8, 10)])]
    #[case(13, 5, vec![(0, 3), (3, 6), (6, 9), (9, 11), (11, 13)])]
    #[case(3, 5, vec![(0, 1), (1, 2), (2, 3), (3, 3), (3, 3)])]
    #[case(7, 1, vec![(0, 7)])]
    fn test_partition_ranges(
        #[case] elements: usize,
        #[case] partitions: usize,
        #[case] expected: Vec<(usize, usize)>,
    ) {
        let ranges = seq::partition_ranges(elements, partitions).unwrap();
        assert_eq!(bounds(ranges.to_vec()), expected);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(3, 0)]
    fn test_partition_ranges_rejects_zero(#[case] elements: usize, #[case] partitions: usize) {
        assert!(matches!(
            seq::partition_ranges(elements, partitions),
            Err(FunctionalError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    fn test_partition_ranges_with_generator_is_one_based() {
        let ranges = seq::partition_ranges_with(|index| index * 100, 4, 2).unwrap();
        assert_eq!(
            ranges.to_vec(),
            vec![Range::new(100, 300), Range::new(300, 500)]
        );
    }

    #[rstest]
    fn test_range_contains_and_converts() {
        let range = Range::new(2, 5);
        assert!(range.contains(&2));
        assert!(!range.contains(&5));
        let standard: std::ops::Range<i32> = range.into();
        assert_eq!(standard.collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}

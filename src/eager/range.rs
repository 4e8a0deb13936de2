//! Splitting `0..elements` into contiguous ranges, materialized.

use super::ImmutableList;
use crate::error::Result;
use crate::seq::{Layout, Range};

/// Splits `0..elements` into `partitions` contiguous ranges.
///
/// The first `elements % partitions` ranges hold one extra element. With
/// fewer elements than partitions, the trailing ranges are the empty range
/// `[elements, elements)`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`](crate::error::FunctionalError::InvalidArgument)
/// if either count is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
/// use seqkit::seq::Range;
///
/// let ranges = eager::partition_ranges(13, 5).unwrap();
/// assert_eq!(
///     ranges,
///     [
///         Range::new(0, 3),
///         Range::new(3, 6),
///         Range::new(6, 9),
///         Range::new(9, 11),
///         Range::new(11, 13),
///     ]
/// );
/// ```
pub fn partition_ranges(elements: usize, partitions: usize) -> Result<ImmutableList<Range<usize>>> {
    let layout = Layout::new("eager::partition_ranges", elements, partitions)?;
    Ok((0..layout.partitions())
        .map(|index| Range::new(layout.bound(index), layout.bound(index + 1)))
        .collect())
}

/// Like [`partition_ranges`], mapping every bound `b` to `generator(b + 1)`.
///
/// The generator uses the same 1-based convention as
/// [`init`](super::init), so [`range`](super::range) can be passed directly.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`](crate::error::FunctionalError::InvalidArgument)
/// if either count is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
/// use seqkit::seq::Range;
///
/// let ranges = eager::partition_ranges_with(eager::range(100), 4, 2).unwrap();
/// assert_eq!(ranges, [Range::new(100, 102), Range::new(102, 104)]);
/// ```
pub fn partition_ranges_with<T, F>(
    mut generator: F,
    elements: usize,
    partitions: usize,
) -> Result<ImmutableList<Range<T>>>
where
    F: FnMut(usize) -> T,
{
    let layout = Layout::new("eager::partition_ranges", elements, partitions)?;
    Ok((0..layout.partitions())
        .map(|index| {
            Range::new(
                generator(layout.bound(index) + 1),
                generator(layout.bound(index + 1) + 1),
            )
        })
        .collect())
}

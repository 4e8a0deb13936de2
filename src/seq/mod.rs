//! Lazy, pull-based sequence adapters.
//!
//! Every adapter in this module is a pair:
//!
//! - an **adapter** implementing [`Sequence`]: immutable, built in constant
//!   time, and restartable through [`Sequence::iterate`]
//! - a **cursor** implementing [`Cursor`]: the mutable, forward-only state
//!   of one traversal
//!
//! Nothing is evaluated until a cursor is pulled. Adapters pull from their
//! upstream one element at a time, so pipelines over infinite generators
//! work as long as something downstream (`take`, `take_while`, `zip` with a
//! finite side) stops the traversal.
//!
//! # Lazy and eager differences
//!
//! The lazy [`take`] yields fewer elements when its upstream is short, and
//! the lazy [`zip`] truncates to the shorter input. Their counterparts in
//! [`eager`](crate::eager) report the shortfall as an error instead.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::seq::{self, Sequence};
//!
//! let words = seq::of(vec!["alpha", "beta", "gamma", "delta"]);
//! let lengths = seq::zip(words.clone(), words.map(str::len));
//! let long: Vec<_> = lengths
//!     .filter(|(_, length)| *length > 4)
//!     .map(|(word, _)| word)
//!     .to_vec();
//!
//! assert_eq!(long, vec!["alpha", "gamma", "delta"]);
//! ```

mod append;
mod collect;
mod cursor;
mod every_nth;
mod filter;
mod generate;
mod map;
mod partition;
mod reverse;
mod sequence;
mod skip;
mod source;
mod take;
mod zip;

pub use append::{Append, AppendCursor, Concat, ConcatCursor};
pub use collect::{Collect, CollectCursor};
pub use cursor::{Cursor, Elements, IterCursor, SliceCursor};
pub use every_nth::{EveryNth, EveryNthCursor};
pub use filter::{Choose, ChooseCursor, Filter, FilterCursor};
pub use generate::{Init, InitCursor, Unfold, UnfoldCursor, UnfoldOption, UnfoldOptionCursor};
pub use map::{Map, MapCursor, MapIndexed, MapIndexedCursor};
pub use partition::{PartitionRanges, PartitionRangesCursor, Range};
pub use reverse::{Reverse, ReverseCursor};
pub use sequence::Sequence;
pub use skip::{Skip, SkipCursor, SkipWhile, SkipWhileCursor};
pub use source::{FromIterable, Of, Once};
pub use take::{Take, TakeCursor, TakeWhile, TakeWhileCursor};
pub use zip::{Zip, Zip3, Zip3Cursor, ZipCursor};

pub(crate) use partition::Layout;

use crate::error::{FunctionalError, Result};

// =============================================================================
// Sources
// =============================================================================

/// A restartable sequence over the given elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let letters = seq::of(['a', 'b', 'c']);
/// assert_eq!(letters.to_vec(), vec!['a', 'b', 'c']);
/// ```
#[inline]
pub fn of<T>(items: impl Into<Vec<T>>) -> Of<T> {
    Of::new(items.into())
}

/// A restartable sequence over a clonable iterable, such as a range.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let digits = seq::from_iterable(0..10);
/// assert_eq!(digits.take(3).to_vec(), vec![0, 1, 2]);
/// ```
#[inline]
pub const fn from_iterable<I>(iterable: I) -> FromIterable<I>
where
    I: Clone + IntoIterator,
{
    FromIterable::new(iterable)
}

/// A sequence over an iterator that may already be partly consumed.
///
/// Only the first traversal sees the elements; later traversals are empty.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let mut remaining = vec![1, 2, 3].into_iter();
/// remaining.next();
///
/// let rest = seq::once(remaining);
/// assert_eq!(rest.to_vec(), vec![2, 3]);
/// assert!(rest.to_vec().is_empty());
/// ```
#[inline]
pub const fn once<I: Iterator>(iterator: I) -> Once<I> {
    Once::new(iterator)
}

// =============================================================================
// Transformations
// =============================================================================

/// Applies `function` to every element.
#[inline]
pub fn map<S, B, F>(function: F, upstream: S) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    Map::new(upstream, function)
}

/// Applies `function` to every element and its 0-based position.
#[inline]
pub fn mapi<S, B, F>(function: F, upstream: S) -> MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(usize, S::Item) -> B,
{
    MapIndexed::new(upstream, function)
}

/// Keeps the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let odd = seq::filter(|value: &i32| value % 2 != 0, seq::of(vec![1, 2, 3, 4, 5]));
/// assert_eq!(odd.to_vec(), vec![1, 3, 5]);
/// ```
#[inline]
pub fn filter<S, P>(predicate: P, upstream: S) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(upstream, predicate)
}

/// Maps every element to an `Option` and keeps the `Some` payloads.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let numbers = seq::choose(|text: &str| text.parse::<u8>().ok(), seq::of(vec!["1", "two", "3"]));
/// assert_eq!(numbers.to_vec(), vec![1, 3]);
/// ```
#[inline]
pub fn choose<S, B, F>(chooser: F, upstream: S) -> Choose<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<B>,
{
    Choose::new(upstream, chooser)
}

/// Keeps the `Some` elements of a sequence of options.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let present = seq::are_some(seq::of(vec![Some(1), None, Some(3)]));
/// assert_eq!(present.to_vec(), vec![Some(1), Some(3)]);
/// ```
#[inline]
pub fn are_some<S, T>(upstream: S) -> Filter<S, fn(&Option<T>) -> bool>
where
    S: Sequence<Item = Option<T>>,
{
    Filter::new(upstream, Option::is_some as fn(&Option<T>) -> bool)
}

/// Keeps the `None` elements of a sequence of options.
#[inline]
pub fn are_none<S, T>(upstream: S) -> Filter<S, fn(&Option<T>) -> bool>
where
    S: Sequence<Item = Option<T>>,
{
    Filter::new(upstream, Option::is_none as fn(&Option<T>) -> bool)
}

/// Maps every element to an iterable and flattens the results.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let expanded = seq::collect(|value: i32| vec![value; 2], seq::of(vec![1, 2]));
/// assert_eq!(expanded.to_vec(), vec![1, 1, 2, 2]);
/// ```
#[inline]
pub fn collect<S, I, F>(function: F, upstream: S) -> Collect<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    Collect::new(upstream, function)
}

/// Pairs every element with two values computed from it.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let described = seq::zip_fn(|n: &i32| n * n, |n: &i32| n % 2 == 0, seq::of(vec![2, 3]));
/// assert_eq!(described.to_vec(), vec![(4, true), (9, false)]);
/// ```
#[inline]
pub fn zip_fn<S, A, B, F, G>(first: F, second: G, upstream: S) -> impl Sequence<Item = (A, B)>
where
    S: Sequence,
    F: Fn(&S::Item) -> A,
    G: Fn(&S::Item) -> B,
{
    Map::new(upstream, move |element: S::Item| (first(&element), second(&element)))
}

/// Pairs the elements of two sequences, stopping at the shorter one.
#[inline]
pub const fn zip<A: Sequence, B: Sequence>(first: A, second: B) -> Zip<A, B> {
    Zip::new(first, second)
}

/// Groups the elements of three sequences, stopping at the shortest one.
#[inline]
pub const fn zip3<A: Sequence, B: Sequence, C: Sequence>(
    first: A,
    second: B,
    third: C,
) -> Zip3<A, B, C> {
    Zip3::new(first, second, third)
}

// =============================================================================
// Windows
// =============================================================================

/// Yields at most the first `count` elements.
#[inline]
pub const fn take<S: Sequence>(count: usize, upstream: S) -> Take<S> {
    Take::new(upstream, count)
}

/// Yields elements until `predicate` first fails.
#[inline]
pub fn take_while<S, P>(predicate: P, upstream: S) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile::new(upstream, predicate)
}

/// Discards the first `count` elements; never fails.
#[inline]
pub const fn skip<S: Sequence>(count: usize, upstream: S) -> Skip<S> {
    Skip::new(upstream, count)
}

/// Discards elements until `predicate` first fails, then yields the rest.
#[inline]
pub fn skip_while<S, P>(predicate: P, upstream: S) -> SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    SkipWhile::new(upstream, predicate)
}

/// Places `head` in front of `upstream`.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let numbered = seq::append(0, seq::of(vec![1, 2]));
/// assert_eq!(numbered.to_vec(), vec![0, 1, 2]);
/// ```
#[inline]
pub const fn append<T, S>(head: T, upstream: S) -> Append<T, S>
where
    T: Clone,
    S: Sequence<Item = T>,
{
    Append::new(head, upstream)
}

/// Yields all of `first`, then all of `second`.
#[inline]
pub const fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Concat::new(first, second)
}

/// Yields the first element, then every `step`-th element after it.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let sampled = seq::every_nth(3, seq::from_iterable(1..=10)).unwrap();
/// assert_eq!(sampled.to_vec(), vec![1, 4, 7, 10]);
/// ```
#[inline]
pub fn every_nth<S: Sequence>(step: usize, upstream: S) -> Result<EveryNth<S>> {
    upstream.every_nth(step)
}

/// A sequence over `items` from last to first.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if `items` is empty.
#[inline]
pub fn reverse<T>(items: impl Into<Vec<T>>) -> Result<Reverse<T>> {
    Reverse::new(items.into())
}

// =============================================================================
// Generators
// =============================================================================

/// The elements `generator(1)` to `generator(how_many)`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if `how_many` is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let evens = seq::init(|index| 2 * index, 5).unwrap();
/// assert_eq!(evens.to_vec(), vec![2, 4, 6, 8, 10]);
/// ```
pub fn init<T, F>(generator: F, how_many: usize) -> Result<Init<F>>
where
    F: Fn(usize) -> T,
{
    if how_many == 0 {
        return Err(FunctionalError::invalid_argument(
            "seq::init",
            "how_many must be at least 1",
        ));
    }
    Ok(Init::new(generator, Some(how_many)))
}

/// The infinite sequence `generator(1)`, `generator(2)`, ...
#[inline]
pub const fn init_unbounded<T, F>(generator: F) -> Init<F>
where
    F: Fn(usize) -> T,
{
    Init::new(generator, None)
}

/// Generates elements from `seed` until `stop` holds for the current state.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let doubles = seq::unfold(|state: i32| (state * 2, state + 1), |state| *state > 10, 1);
/// assert_eq!(doubles.to_vec(), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
/// ```
#[inline]
pub const fn unfold<St, T, F, P>(step: F, stop: P, seed: St) -> Unfold<St, F, P>
where
    St: Clone,
    F: Fn(St) -> (T, St),
    P: Fn(&St) -> bool,
{
    Unfold::new(step, stop, seed)
}

/// Generates elements from `seed` until `step` returns `None`.
#[inline]
pub const fn unfold_option<St, T, F>(step: F, seed: St) -> UnfoldOption<St, F>
where
    St: Clone,
    F: Fn(St) -> Option<(T, St)>,
{
    UnfoldOption::new(step, seed)
}

const fn bound_from_index(index: usize) -> usize {
    index - 1
}

/// Splits `0..elements` into `partitions` contiguous ranges.
///
/// The first `elements % partitions` ranges hold one extra element; with
/// fewer elements than partitions the trailing ranges are empty.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if either count is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Range, Sequence};
///
/// let ranges = seq::partition_ranges(5, 2).unwrap();
/// assert_eq!(ranges.to_vec(), vec![Range::new(0, 3), Range::new(3, 5)]);
/// ```
pub fn partition_ranges(
    elements: usize,
    partitions: usize,
) -> Result<PartitionRanges<fn(usize) -> usize>> {
    let layout = Layout::new("seq::partition_ranges", elements, partitions)?;
    Ok(PartitionRanges::new(
        layout,
        bound_from_index as fn(usize) -> usize,
    ))
}

/// Like [`partition_ranges`], mapping every bound `b` to `generator(b + 1)`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if either count is zero.
pub fn partition_ranges_with<T, F>(
    generator: F,
    elements: usize,
    partitions: usize,
) -> Result<PartitionRanges<F>>
where
    F: Fn(usize) -> T,
{
    let layout = Layout::new("seq::partition_ranges", elements, partitions)?;
    Ok(PartitionRanges::new(layout, generator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Of<i32>: Sequence, Clone);
    assert_impl_all!(Reverse<String>: Sequence, Clone);
    assert_impl_all!(Elements<SliceCursor<'static, u8>>: Iterator);

    #[rstest]
    fn test_are_some_and_are_none_are_restartable() {
        let readings = of(vec![None, Some(2), None, Some(4)]);
        let present = are_some(readings.clone());
        let missing = are_none(readings);

        assert_eq!(present.to_vec(), vec![Some(2), Some(4)]);
        assert_eq!(present.to_vec(), vec![Some(2), Some(4)]);
        assert_eq!(missing.to_vec(), vec![None, None]);
    }

    #[rstest]
    fn test_pipeline_restarts_independently() {
        let pipeline = filter(|value: &i32| value % 3 == 0, of(vec![1, 3, 6, 7, 9]))
            .map(|value| value / 3)
            .skip(1);

        let mut first = pipeline.iterate();
        let mut second = pipeline.iterate();
        assert_eq!(first.next_element(), Ok(2));
        assert_eq!(first.next_element(), Ok(3));
        assert_eq!(second.next_element(), Ok(2));
        assert!(!first.has_next());
        assert!(second.has_next());
    }

    #[rstest]
    fn test_zip_fn_restarts() {
        let pairs = zip_fn(|n: &i32| n + 1, |n: &i32| n - 1, of(vec![10]));
        assert_eq!(pairs.to_vec(), vec![(11, 9)]);
        assert_eq!(pairs.to_vec(), vec![(11, 9)]);
    }
}

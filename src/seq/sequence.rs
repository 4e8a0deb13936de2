//! The restartable half of the adapter/cursor pair.

use super::append::Concat;
use super::collect::Collect;
use super::cursor::{Cursor, Elements};
use super::every_nth::EveryNth;
use super::filter::{Choose, Filter};
use super::map::{Map, MapIndexed};
use super::reverse::Reverse;
use super::skip::{Skip, SkipWhile};
use super::take::{Take, TakeWhile};
use super::zip::{Zip, Zip3};
use crate::error::{FunctionalError, Result};

/// An immutable, restartable description of a sequence of elements.
///
/// Nothing is computed when a sequence is built. Each call to
/// [`iterate`](Self::iterate) returns a fresh [`Cursor`] that holds all
/// traversal state, so one sequence can be walked any number of times and
/// every walk yields the same elements. The exception is
/// [`once`](super::once), whose source can only be read once.
///
/// The combinator methods wrap `self` in an adapter; they mirror the free
/// functions of the [`seq`](super) module.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Sequence};
///
/// let squares = seq::init_unbounded(|index| index * index)
///     .filter(|square: &usize| square % 2 == 1)
///     .take(4);
///
/// assert_eq!(squares.to_vec(), vec![1, 9, 25, 49]);
/// assert_eq!(squares.elements().sum::<usize>(), 84);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type handed out by [`iterate`](Self::iterate).
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal.
    fn iterate(&self) -> Self::Cursor<'_>;

    /// Starts a new traversal as a standard [`Iterator`].
    #[inline]
    fn elements(&self) -> Elements<Self::Cursor<'_>> {
        self.iterate().into_elements()
    }

    /// Collects one full traversal into a vector.
    ///
    /// Never returns for an infinite sequence.
    #[inline]
    fn to_vec(&self) -> Vec<Self::Item> {
        self.elements().collect()
    }

    /// See [`seq::map`](super::map).
    #[inline]
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// See [`seq::mapi`](super::mapi).
    #[inline]
    fn mapi<B, F>(self, function: F) -> MapIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(usize, Self::Item) -> B,
    {
        MapIndexed::new(self, function)
    }

    /// See [`seq::filter`](super::filter).
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// See [`seq::choose`](super::choose).
    #[inline]
    fn choose<B, F>(self, chooser: F) -> Choose<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<B>,
    {
        Choose::new(self, chooser)
    }

    /// See [`seq::collect`](super::collect).
    #[inline]
    fn collect<I, F>(self, function: F) -> Collect<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        Collect::new(self, function)
    }

    /// See [`seq::zip`](super::zip).
    #[inline]
    fn zip<B: Sequence>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
    {
        Zip::new(self, other)
    }

    /// See [`seq::zip3`](super::zip3).
    #[inline]
    fn zip3<B: Sequence, C: Sequence>(self, second: B, third: C) -> Zip3<Self, B, C>
    where
        Self: Sized,
    {
        Zip3::new(self, second, third)
    }

    /// See [`seq::take`](super::take).
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// See [`seq::take_while`](super::take_while).
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// See [`seq::skip`](super::skip).
    #[inline]
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// See [`seq::skip_while`](super::skip_while).
    #[inline]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// See [`seq::concat`](super::concat).
    #[inline]
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// See [`seq::every_nth`](super::every_nth).
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidArgument`] if `step` is zero.
    fn every_nth(self, step: usize) -> Result<EveryNth<Self>>
    where
        Self: Sized,
    {
        if step == 0 {
            return Err(FunctionalError::invalid_argument(
                "seq::every_nth",
                "step must be greater than zero",
            ));
        }
        Ok(EveryNth::new(self, step))
    }

    /// Reads one full traversal and returns it as a reversed sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidArgument`] if the traversal is empty.
    fn reverse(&self) -> Result<Reverse<Self::Item>> {
        Reverse::new(self.to_vec())
    }
}

//! Sequences that read from data the caller already has.

use std::cell::Cell;
use std::fmt;

use super::cursor::{IterCursor, SliceCursor};
use super::Sequence;

/// A restartable sequence over an owned vector.
///
/// Created by [`of`](super::of).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Of<T> {
    items: Vec<T>,
}

impl<T> Of<T> {
    pub(crate) const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the underlying elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Sequence for Of<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        SliceCursor::new(&self.items)
    }
}

/// A restartable sequence over any clonable iterable.
///
/// Each traversal clones the iterable and iterates the clone, so ranges,
/// borrowed slices and other iterator values can all be sources.
///
/// Created by [`from_iterable`](super::from_iterable).
#[derive(Debug, Clone)]
pub struct FromIterable<I> {
    iterable: I,
}

impl<I> FromIterable<I> {
    pub(crate) const fn new(iterable: I) -> Self {
        Self { iterable }
    }
}

impl<I> Sequence for FromIterable<I>
where
    I: Clone + IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I::IntoIter>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iterable.clone().into_iter())
    }
}

/// A sequence over an iterator that cannot be restarted.
///
/// The first call to [`iterate`](Sequence::iterate) receives the iterator;
/// every later call receives an empty cursor. Use it to feed an
/// already-advanced iterator into an adapter pipeline when restarting is
/// not needed.
///
/// Created by [`once`](super::once).
pub struct Once<I> {
    source: Cell<Option<I>>,
}

impl<I> Once<I> {
    pub(crate) const fn new(iterator: I) -> Self {
        Self {
            source: Cell::new(Some(iterator)),
        }
    }
}

impl<I: Iterator> Sequence for Once<I> {
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<std::iter::Flatten<std::option::IntoIter<I>>>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.source.take().into_iter().flatten())
    }
}

impl<I> fmt::Debug for Once<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Once").finish_non_exhaustive()
    }
}

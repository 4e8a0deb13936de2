//! Single-use iteration state handed out by a [`Sequence`](super::Sequence).
//!
//! A [`Cursor`] is the mutable half of the adapter/cursor pair: it owns the
//! position of one traversal and moves forward only. `has_next` never
//! advances, and calling it repeatedly gives the same answer; adapters
//! that must look ahead to answer it park the element they found in a
//! [`Lookahead`] slot so that `next_element` hands it out without scanning
//! again.

use std::fmt;

use crate::error::{FunctionalError, Result};

/// Forward-only, single-use iteration state.
///
/// # Examples
///
/// ```rust
/// use seqkit::seq::{self, Cursor, Sequence};
///
/// let numbers = seq::of(vec![1, 2, 3]);
/// let mut cursor = numbers.iterate();
///
/// assert!(cursor.has_next());
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next_element(), Ok(1));
/// assert_eq!(cursor.next_element(), Ok(2));
/// assert_eq!(cursor.next_element(), Ok(3));
/// assert!(!cursor.has_next());
/// assert!(cursor.next_element().is_err());
/// ```
pub trait Cursor {
    /// The element type produced by this cursor.
    type Item;

    /// Returns `true` if another element is available.
    ///
    /// Repeated calls without an intervening [`next_element`](Self::next_element)
    /// return the same answer and do not change the position.
    fn has_next(&mut self) -> bool;

    /// Returns the next element and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Exhausted`] once [`has_next`](Self::has_next)
    /// would return `false`.
    fn next_element(&mut self) -> Result<Self::Item>;

    /// Removes the last element returned from the underlying source.
    ///
    /// Sequences are read-only views, so no cursor in this crate supports it.
    ///
    /// # Errors
    ///
    /// Always returns [`FunctionalError::UnsupportedOperation`].
    fn remove(&mut self) -> Result<()> {
        Err(FunctionalError::unsupported(
            "seq::Cursor::remove",
            "sequences are read-only views",
        ))
    }

    /// Turns the cursor into a standard [`Iterator`].
    #[inline]
    fn into_elements(self) -> Elements<Self>
    where
        Self: Sized,
    {
        Elements { cursor: self }
    }
}

/// An [`Iterator`] over the remaining elements of a [`Cursor`].
///
/// Produced by [`Cursor::into_elements`] and
/// [`Sequence::elements`](super::Sequence::elements).
pub struct Elements<C> {
    cursor: C,
}

impl<C> Elements<C> {
    /// Returns the wrapped cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Elements<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.next_element().ok()
        } else {
            None
        }
    }
}

impl<C> fmt::Debug for Elements<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Elements").finish_non_exhaustive()
    }
}

// =============================================================================
// Lookahead
// =============================================================================

/// The state of a cursor that has to look ahead to answer `has_next`.
///
/// `Pending` means nobody has looked yet, `Ready` holds the element found
/// by the last look, and `Exhausted` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookahead<T> {
    Pending,
    Ready(T),
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Runs `search` if no element is parked, and reports whether one is ready.
    ///
    /// `search` returning `None` moves the state to `Exhausted` for good.
    #[inline]
    pub(crate) fn fill_with<F>(&mut self, search: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        if matches!(self, Self::Pending) {
            *self = search().map_or(Self::Exhausted, Self::Ready);
        }
        matches!(self, Self::Ready(_))
    }

    /// Hands out the parked element, leaving the slot `Pending`.
    #[inline]
    pub(crate) fn take(&mut self, operation: &'static str) -> Result<T> {
        match std::mem::replace(self, Self::Pending) {
            Self::Ready(value) => Ok(value),
            Self::Pending => Err(FunctionalError::exhausted(operation)),
            Self::Exhausted => {
                *self = Self::Exhausted;
                Err(FunctionalError::exhausted(operation))
            }
        }
    }
}

// =============================================================================
// Iterator-backed cursor
// =============================================================================

/// A cursor over any [`Iterator`].
///
/// Used by the sources built from Rust iterators.
pub struct IterCursor<I: Iterator> {
    iterator: I,
    lookahead: Lookahead<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub(crate) const fn new(iterator: I) -> Self {
        Self {
            iterator,
            lookahead: Lookahead::Pending,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        let iterator = &mut self.iterator;
        self.lookahead.fill_with(|| iterator.next())
    }

    #[inline]
    fn next_element(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take("seq::iterate")
    }
}

/// A cursor over a borrowed slice, cloning each element it yields.
pub struct SliceCursor<'a, T> {
    remaining: std::slice::Iter<'a, T>,
}

impl<'a, T> SliceCursor<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            remaining: items.iter(),
        }
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.remaining.as_slice().is_empty()
    }

    #[inline]
    fn next_element(&mut self) -> Result<T> {
        self.remaining
            .next()
            .cloned()
            .ok_or_else(|| FunctionalError::exhausted("seq::of"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_lookahead_searches_once() {
        let mut lookahead = Lookahead::Pending;
        let mut searches = 0;
        for _ in 0..3 {
            assert!(lookahead.fill_with(|| {
                searches += 1;
                Some(7)
            }));
        }
        assert_eq!(searches, 1);
        assert_eq!(lookahead.take("test"), Ok(7));
        assert_eq!(lookahead, Lookahead::Pending);
    }

    #[rstest]
    fn test_lookahead_exhausted_is_terminal() {
        let mut lookahead: Lookahead<i32> = Lookahead::Pending;
        assert!(!lookahead.fill_with(|| None));
        assert!(!lookahead.fill_with(|| Some(1)));
        assert_eq!(lookahead.take("test"), Err(FunctionalError::exhausted("test")));
        assert_eq!(lookahead, Lookahead::Exhausted);
    }

    #[rstest]
    fn test_iter_cursor_has_next_is_idempotent() {
        let mut cursor = IterCursor::new(vec![1, 2].into_iter());
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next_element(), Ok(1));
        assert_eq!(cursor.next_element(), Ok(2));
        assert!(!cursor.has_next());
        assert!(cursor.next_element().is_err());
    }

    #[rstest]
    fn test_remove_is_unsupported() {
        let mut cursor = SliceCursor::new(&[1, 2, 3]);
        assert!(matches!(
            cursor.remove(),
            Err(FunctionalError::UnsupportedOperation { .. })
        ));
    }

    #[rstest]
    fn test_elements_stops_at_end() {
        let collected: Vec<i32> = SliceCursor::new(&[4, 5]).into_elements().collect();
        assert_eq!(collected, vec![4, 5]);
    }
}

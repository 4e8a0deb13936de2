//! Adapters that join sequences end to end.

use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// One element placed in front of an upstream sequence.
///
/// Created by [`append`](super::append).
#[derive(Debug, Clone)]
pub struct Append<T, S> {
    head: T,
    upstream: S,
}

impl<T, S> Append<T, S> {
    pub(crate) const fn new(head: T, upstream: S) -> Self {
        Self { head, upstream }
    }
}

impl<T, S> Sequence for Append<T, S>
where
    T: Clone,
    S: Sequence<Item = T>,
{
    type Item = T;
    type Cursor<'a>
        = AppendCursor<T, S::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        AppendCursor {
            head: Some(self.head.clone()),
            upstream: self.upstream.iterate(),
        }
    }
}

/// Cursor of [`Append`].
pub struct AppendCursor<T, C> {
    head: Option<T>,
    upstream: C,
}

impl<T, C> Cursor for AppendCursor<T, C>
where
    C: Cursor<Item = T>,
{
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.head.is_some() || self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<T> {
        match self.head.take() {
            Some(head) => Ok(head),
            None => self.upstream.next_element(),
        }
    }

    fn remove(&mut self) -> Result<()> {
        Err(FunctionalError::unsupported(
            "seq::append",
            "an appended sequence cannot have elements removed",
        ))
    }
}

/// Two sequences, one after the other.
///
/// Created by [`concat`](super::concat) or [`Sequence::concat`].
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor<'a>
        = ConcatCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: self.first.iterate(),
            second: self.second.iterate(),
        }
    }
}

/// Cursor of [`Concat`].
pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.first.has_next() || self.second.has_next()
    }

    fn next_element(&mut self) -> Result<A::Item> {
        if self.first.has_next() {
            self.first.next_element()
        } else {
            self.second.next_element()
        }
    }
}

//! Lock-step adapters over two or three sequences.
//!
//! The lazy zips stop as soon as any input runs out. The eager
//! [`eager::zip`](crate::eager::zip) rejects inputs of differing length
//! instead; the two behaviours are deliberately different.

use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// Pairs up the elements of two sequences.
///
/// Created by [`zip`](super::zip) or [`Sequence::zip`].
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor<'a>
        = ZipCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        ZipCursor {
            first: self.first.iterate(),
            second: self.second.iterate(),
        }
    }
}

/// Cursor of [`Zip`].
pub struct ZipCursor<A, B> {
    first: A,
    second: B,
}

impl<A: Cursor, B: Cursor> Cursor for ZipCursor<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn has_next(&mut self) -> bool {
        self.first.has_next() && self.second.has_next()
    }

    fn next_element(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(FunctionalError::exhausted("seq::zip"));
        }
        Ok((self.first.next_element()?, self.second.next_element()?))
    }
}

/// Groups the elements of three sequences into triples.
///
/// Created by [`zip3`](super::zip3).
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Zip3<A, B, C> {
    pub(crate) const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<A: Sequence, B: Sequence, C: Sequence> Sequence for Zip3<A, B, C> {
    type Item = (A::Item, B::Item, C::Item);
    type Cursor<'a>
        = Zip3Cursor<A::Cursor<'a>, B::Cursor<'a>, C::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        Zip3Cursor {
            first: self.first.iterate(),
            second: self.second.iterate(),
            third: self.third.iterate(),
        }
    }
}

/// Cursor of [`Zip3`].
pub struct Zip3Cursor<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A: Cursor, B: Cursor, C: Cursor> Cursor for Zip3Cursor<A, B, C> {
    type Item = (A::Item, B::Item, C::Item);

    #[inline]
    fn has_next(&mut self) -> bool {
        self.first.has_next() && self.second.has_next() && self.third.has_next()
    }

    fn next_element(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(FunctionalError::exhausted("seq::zip3"));
        }
        Ok((
            self.first.next_element()?,
            self.second.next_element()?,
            self.third.next_element()?,
        ))
    }
}

//! Prefix-dropping adapters: `skip` and `skip_while`.

use super::{Cursor, Sequence};
use crate::error::Result;

/// Discards the first `count` elements of the upstream sequence.
///
/// Skipping past the end yields an empty sequence, never an error.
///
/// Created by [`skip`](super::skip) or [`Sequence::skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    upstream: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) const fn new(upstream: S, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        SkipCursor {
            upstream: self.upstream.iterate(),
            pending: self.count,
        }
    }
}

/// Cursor of [`Skip`].
pub struct SkipCursor<C> {
    upstream: C,
    pending: usize,
}

impl<C: Cursor> SkipCursor<C> {
    fn discard_prefix(&mut self) {
        while self.pending > 0 && self.upstream.has_next() {
            if self.upstream.next_element().is_err() {
                break;
            }
            self.pending -= 1;
        }
        self.pending = 0;
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.discard_prefix();
        self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<C::Item> {
        self.discard_prefix();
        self.upstream.next_element()
    }
}

/// Discards elements while a predicate holds, then yields the rest.
///
/// The first element that fails the predicate is yielded.
///
/// Created by [`skip_while`](super::skip_while) or [`Sequence::skip_while`].
#[derive(Debug, Clone)]
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) const fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = SkipWhileCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        SkipWhileCursor {
            upstream: self.upstream.iterate(),
            predicate: &self.predicate,
            first_kept: None,
            skipping: true,
        }
    }
}

/// Cursor of [`SkipWhile`].
pub struct SkipWhileCursor<'a, C: Cursor, P> {
    upstream: C,
    predicate: &'a P,
    first_kept: Option<C::Item>,
    skipping: bool,
}

impl<C, P> SkipWhileCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn discard_prefix(&mut self) {
        if !self.skipping {
            return;
        }
        self.skipping = false;
        while self.upstream.has_next() {
            match self.upstream.next_element() {
                Ok(candidate) if (self.predicate)(&candidate) => {}
                Ok(candidate) => {
                    self.first_kept = Some(candidate);
                    return;
                }
                Err(_) => return,
            }
        }
    }
}

impl<C, P> Cursor for SkipWhileCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.discard_prefix();
        self.first_kept.is_some() || self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<C::Item> {
        self.discard_prefix();
        match self.first_kept.take() {
            Some(element) => Ok(element),
            None => self.upstream.next_element(),
        }
    }
}

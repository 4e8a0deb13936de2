//! Adapters that drop elements: `filter` and `choose`.
//!
//! Both must scan ahead to answer `has_next`, because whether another
//! element exists depends on the predicate. The element found by the scan
//! is parked in a [`Lookahead`] slot and handed out by `next_element`, so
//! the upstream is never advanced twice for the same element.

use super::cursor::Lookahead;
use super::{Cursor, Sequence};
use crate::error::Result;

/// Keeps the elements for which a predicate holds.
///
/// Created by [`filter`](super::filter) or [`Sequence::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.upstream.iterate(),
            predicate: &self.predicate,
            lookahead: Lookahead::Pending,
        }
    }
}

/// Cursor of [`Filter`].
pub struct FilterCursor<'a, C: Cursor, P> {
    upstream: C,
    predicate: &'a P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let predicate = self.predicate;
        self.lookahead.fill_with(|| {
            while upstream.has_next() {
                let candidate = upstream.next_element().ok()?;
                if predicate(&candidate) {
                    return Some(candidate);
                }
            }
            None
        })
    }

    fn next_element(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take("seq::filter")
    }
}

/// Maps every element to an `Option` and keeps the payloads of the `Some`s.
///
/// Created by [`choose`](super::choose) or [`Sequence::choose`].
#[derive(Debug, Clone)]
pub struct Choose<S, F> {
    upstream: S,
    chooser: F,
}

impl<S, F> Choose<S, F> {
    pub(crate) const fn new(upstream: S, chooser: F) -> Self {
        Self { upstream, chooser }
    }
}

impl<S, F, B> Sequence for Choose<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<B>,
{
    type Item = B;
    type Cursor<'a>
        = ChooseCursor<'a, S::Cursor<'a>, F, B>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        ChooseCursor {
            upstream: self.upstream.iterate(),
            chooser: &self.chooser,
            lookahead: Lookahead::Pending,
        }
    }
}

/// Cursor of [`Choose`].
pub struct ChooseCursor<'a, C, F, B> {
    upstream: C,
    chooser: &'a F,
    lookahead: Lookahead<B>,
}

impl<C, F, B> Cursor for ChooseCursor<'_, C, F, B>
where
    C: Cursor,
    F: Fn(C::Item) -> Option<B>,
{
    type Item = B;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let chooser = self.chooser;
        self.lookahead.fill_with(|| {
            while upstream.has_next() {
                if let Some(chosen) = chooser(upstream.next_element().ok()?) {
                    return Some(chosen);
                }
            }
            None
        })
    }

    fn next_element(&mut self) -> Result<B> {
        self.has_next();
        self.lookahead.take("seq::choose")
    }
}

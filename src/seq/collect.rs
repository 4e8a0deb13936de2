//! Flat-mapping adapter.

use super::cursor::Lookahead;
use super::{Cursor, Sequence};
use crate::error::Result;

/// Maps each element to an iterable and presents the concatenation of all
/// of them as one sequence.
///
/// Empty sub-sequences are skipped without the consumer seeing a boundary.
///
/// Created by [`collect`](super::collect) or [`Sequence::collect`].
#[derive(Debug, Clone)]
pub struct Collect<S, F> {
    upstream: S,
    function: F,
}

impl<S, F> Collect<S, F> {
    pub(crate) const fn new(upstream: S, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<S, F, I> Sequence for Collect<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = CollectCursor<'a, S::Cursor<'a>, F, I::IntoIter>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        CollectCursor {
            upstream: self.upstream.iterate(),
            function: &self.function,
            current: None,
            lookahead: Lookahead::Pending,
        }
    }
}

/// Cursor of [`Collect`].
pub struct CollectCursor<'a, C, F, J: Iterator> {
    upstream: C,
    function: &'a F,
    current: Option<J>,
    lookahead: Lookahead<J::Item>,
}

impl<C, F, I, J> Cursor for CollectCursor<'_, C, F, J>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoIterator<IntoIter = J>,
    J: Iterator,
{
    type Item = J::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let function = self.function;
        let current = &mut self.current;
        self.lookahead.fill_with(|| {
            loop {
                if let Some(element) = current.as_mut().and_then(Iterator::next) {
                    return Some(element);
                }
                if !upstream.has_next() {
                    *current = None;
                    return None;
                }
                *current = Some(function(upstream.next_element().ok()?).into_iter());
            }
        })
    }

    fn next_element(&mut self) -> Result<Self::Item> {
        self.has_next();
        self.lookahead.take("seq::collect")
    }
}

//! Prefix adapters: `take` and `take_while`.

use super::cursor::Lookahead;
use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// Yields at most the first `count` elements of the upstream sequence.
///
/// A short upstream simply yields fewer elements. This differs from
/// [`eager::take`](crate::eager::take), which reports the shortfall.
///
/// Created by [`take`](super::take) or [`Sequence::take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    upstream: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) const fn new(upstream: S, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        TakeCursor {
            upstream: self.upstream.iterate(),
            remaining: self.count,
        }
    }
}

/// Cursor of [`Take`].
pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<C::Item> {
        if self.remaining == 0 {
            return Err(FunctionalError::exhausted("seq::take"));
        }
        let element = self.upstream.next_element()?;
        self.remaining -= 1;
        Ok(element)
    }
}

/// Yields elements while a predicate holds.
///
/// The first element that fails the predicate ends the sequence. It is
/// read from the upstream to test it but never handed out.
///
/// Created by [`take_while`](super::take_while) or [`Sequence::take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) const fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = TakeWhileCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        TakeWhileCursor {
            upstream: self.upstream.iterate(),
            predicate: &self.predicate,
            lookahead: Lookahead::Pending,
        }
    }
}

/// Cursor of [`TakeWhile`].
pub struct TakeWhileCursor<'a, C: Cursor, P> {
    upstream: C,
    predicate: &'a P,
    lookahead: Lookahead<C::Item>,
}

impl<C, P> Cursor for TakeWhileCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let upstream = &mut self.upstream;
        let predicate = self.predicate;
        self.lookahead.fill_with(|| {
            if !upstream.has_next() {
                return None;
            }
            upstream
                .next_element()
                .ok()
                .filter(|candidate| predicate(candidate))
        })
    }

    fn next_element(&mut self) -> Result<C::Item> {
        self.has_next();
        self.lookahead.take("seq::take_while")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FunctionalError;
    use crate::seq::{self, Cursor, Sequence};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(3, vec![1, 2, 3])]
    #[case(10, vec![1, 2, 3])]
    fn test_take_yields_at_most_count(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(seq::of(vec![1, 2, 3]).take(count).to_vec(), expected);
    }

    #[rstest]
    fn test_take_stops_infinite_upstream() {
        let first = seq::init_unbounded(|index| index * 10).take(3);
        assert_eq!(first.to_vec(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_take_while_stops_at_first_failure() {
        let small = seq::of(vec![1, 2, 5, 1, 2]).take_while(|value: &i32| *value < 3);
        assert_eq!(small.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_take_while_after_finish() {
        let small = seq::of(vec![1, 9]).take_while(|value: &i32| *value < 3);
        let mut cursor = small.iterate();
        assert_eq!(cursor.next_element(), Ok(1));
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert_eq!(
            cursor.next_element(),
            Err(FunctionalError::exhausted("seq::take_while"))
        );
    }
}

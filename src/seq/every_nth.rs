//! Strided sampling.

use super::{Cursor, Sequence};
use crate::error::Result;

/// The first element of the upstream, then every `step`-th one after it.
///
/// Created by [`every_nth`](super::every_nth), which rejects a zero step.
#[derive(Debug, Clone)]
pub struct EveryNth<S> {
    upstream: S,
    step: usize,
}

impl<S> EveryNth<S> {
    pub(crate) const fn new(upstream: S, step: usize) -> Self {
        Self { upstream, step }
    }
}

impl<S: Sequence> Sequence for EveryNth<S> {
    type Item = S::Item;
    type Cursor<'a>
        = EveryNthCursor<S::Cursor<'a>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        EveryNthCursor {
            upstream: self.upstream.iterate(),
            step: self.step,
            gap: 0,
        }
    }
}

/// Cursor of [`EveryNth`].
pub struct EveryNthCursor<C> {
    upstream: C,
    step: usize,
    gap: usize,
}

impl<C: Cursor> EveryNthCursor<C> {
    /// Skips the elements between the last one yielded and the next one due.
    fn seek(&mut self) {
        while self.gap > 0 && self.upstream.has_next() {
            if self.upstream.next_element().is_err() {
                break;
            }
            self.gap -= 1;
        }
        self.gap = 0;
    }
}

impl<C: Cursor> Cursor for EveryNthCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.seek();
        self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<C::Item> {
        self.seek();
        let element = self.upstream.next_element()?;
        self.gap = self.step - 1;
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use crate::seq::{self, Cursor, Sequence};
    use rstest::rstest;

    #[rstest]
    #[case(1, vec![1, 2, 3, 4, 5, 6, 7])]
    #[case(2, vec![1, 3, 5, 7])]
    #[case(3, vec![1, 4, 7])]
    #[case(10, vec![1])]
    fn test_every_nth(#[case] step: usize, #[case] expected: Vec<i32>) {
        let sampled = seq::every_nth(step, seq::of(vec![1, 2, 3, 4, 5, 6, 7])).unwrap();
        assert_eq!(sampled.to_vec(), expected);
    }

    #[rstest]
    fn test_every_nth_rejects_zero_step() {
        assert!(seq::every_nth(0, seq::of(vec![1])).is_err());
    }

    #[rstest]
    fn test_every_nth_next_without_has_next() {
        let sampled = seq::every_nth(2, seq::of(vec![10, 20, 30, 40])).unwrap();
        let mut cursor = sampled.iterate();
        assert_eq!(cursor.next_element(), Ok(10));
        assert_eq!(cursor.next_element(), Ok(30));
        assert!(!cursor.has_next());
        assert!(!cursor.has_next());
        assert!(cursor.next_element().is_err());
    }
}

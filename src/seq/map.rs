//! Element-wise transformation adapters.

use std::fmt;

use super::{Cursor, Sequence};
use crate::error::Result;

/// Applies a function to every element of the upstream sequence.
///
/// Created by [`map`](super::map) or [`Sequence::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    upstream: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(upstream: S, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.upstream.iterate(),
            function: &self.function,
        }
    }
}

/// Cursor of [`Map`].
pub struct MapCursor<'a, C, F> {
    upstream: C,
    function: &'a F,
}

impl<C, F, B> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    #[inline]
    fn next_element(&mut self) -> Result<B> {
        self.upstream.next_element().map(self.function)
    }
}

/// Applies a function to every element together with its 0-based position.
///
/// Created by [`mapi`](super::mapi) or [`Sequence::mapi`].
#[derive(Clone)]
pub struct MapIndexed<S, F> {
    upstream: S,
    function: F,
}

impl<S, F> MapIndexed<S, F> {
    pub(crate) const fn new(upstream: S, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<S, F, B> Sequence for MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(usize, S::Item) -> B,
{
    type Item = B;
    type Cursor<'a>
        = MapIndexedCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        MapIndexedCursor {
            upstream: self.upstream.iterate(),
            function: &self.function,
            position: 0,
        }
    }
}

/// Cursor of [`MapIndexed`].
pub struct MapIndexedCursor<'a, C, F> {
    upstream: C,
    function: &'a F,
    position: usize,
}

impl<C, F, B> Cursor for MapIndexedCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(usize, C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next_element(&mut self) -> Result<B> {
        let element = self.upstream.next_element()?;
        let position = self.position;
        self.position += 1;
        Ok((self.function)(position, element))
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapIndexed<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapIndexed")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::seq::{self, Cursor, Sequence};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mapped = seq::of(vec![1, 2, 3]).map(|value: i32| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 0);

        let mut cursor = mapped.iterate();
        assert!(cursor.has_next());
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.next_element(), Ok(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_mapi_index_is_zero_based_and_restarts() {
        let labelled = seq::of(vec!["a", "b"]).mapi(|index, value| format!("{index}{value}"));
        assert_eq!(labelled.to_vec(), vec!["0a", "1b"]);
        assert_eq!(labelled.to_vec(), vec!["0a", "1b"]);
    }
}

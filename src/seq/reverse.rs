//! Backwards traversal of a finite list.

use std::rc::Rc;

use super::{Cursor, Sequence};
use crate::error::{FunctionalError, Result};

/// A finite list traversed from its last element to its first.
///
/// The elements are held in memory, so this cannot be built over an
/// infinite upstream. Created by [`reverse`](super::reverse) or
/// [`Sequence::reverse`], both of which reject an empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverse<T> {
    items: Rc<[T]>,
}

impl<T> Reverse<T> {
    pub(crate) fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(FunctionalError::invalid_argument(
                "seq::reverse",
                "cannot reverse an empty list",
            ));
        }
        Ok(Self {
            items: Rc::from(items),
        })
    }
}

impl<T: Clone> Sequence for Reverse<T> {
    type Item = T;
    type Cursor<'a>
        = ReverseCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        ReverseCursor {
            remaining: self.items.iter().rev(),
        }
    }
}

/// Cursor of [`Reverse`].
pub struct ReverseCursor<'a, T> {
    remaining: std::iter::Rev<std::slice::Iter<'a, T>>,
}

impl<T: Clone> Cursor for ReverseCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.remaining.len() > 0
    }

    #[inline]
    fn next_element(&mut self) -> Result<T> {
        self.remaining
            .next()
            .cloned()
            .ok_or_else(|| FunctionalError::exhausted("seq::reverse"))
    }
}

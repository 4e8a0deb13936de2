//! Read-only list returned by the eager combinators.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::seq::{Cursor, Sequence, SliceCursor};

/// A read-only, cheaply clonable list.
///
/// `ImmutableList` has no mutating methods. Cloning it shares the same
/// storage, so handing the output of one combinator to several consumers
/// never copies the elements. It dereferences to a slice for reading and
/// is itself a restartable [`Sequence`], so eager results can feed lazy
/// pipelines directly.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager::{self, ImmutableList};
/// use seqkit::seq::Sequence;
///
/// let doubled: ImmutableList<i32> = eager::map(|n| n * 2, vec![1, 2, 3]);
/// assert_eq!(doubled, [2, 4, 6]);
/// assert_eq!(doubled.len(), 3);
///
/// let shared = doubled.clone();
/// assert_eq!(shared.filter(|n: &i32| *n > 2).to_vec(), vec![4, 6]);
/// ```
pub struct ImmutableList<T> {
    items: Rc<[T]>,
}

impl<T> ImmutableList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Rc::from(Vec::new()),
        }
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copies the elements into a new, owned vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> Clone for ImmutableList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ImmutableList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Rc::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for ImmutableList<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self {
            items: Rc::from(items),
        }
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self {
            items: iterable.into_iter().collect(),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = ImmutableListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableListIntoIter {
            list: self,
            position: 0,
        }
    }
}

/// An owning iterator over an [`ImmutableList`], cloning each element.
pub struct ImmutableListIntoIter<T> {
    list: ImmutableList<T>,
    position: usize,
}

impl<T: Clone> Iterator for ImmutableListIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let element = self.list.items.get(self.position).cloned();
        if element.is_some() {
            self.position += 1;
        }
        element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ImmutableListIntoIter<T> {}

impl<T: Clone> Sequence for ImmutableList<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Cursor<'_> {
        SliceCursor::new(&self.items)
    }
}

/// Drains a fresh traversal of `sequence` into a list.
pub(crate) fn drain<S: Sequence>(sequence: &S) -> ImmutableList<S::Item> {
    let mut cursor = sequence.iterate();
    let mut items = Vec::new();
    while cursor.has_next() {
        match cursor.next_element() {
            Ok(element) => items.push(element),
            Err(_) => break,
        }
    }
    ImmutableList::from(items)
}

// =============================================================================
// Comparison and formatting
// =============================================================================

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for ImmutableList<T> {
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for ImmutableList<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.items[..] == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for ImmutableList<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: std::hash::Hash> std::hash::Hash for ImmutableList<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.items[..].hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(ImmutableList<i32>: Clone, Deref<Target = [i32]>, Sequence);
    assert_not_impl_any!(ImmutableList<i32>: std::ops::DerefMut, std::ops::IndexMut<usize>);

    #[rstest]
    fn test_clone_shares_storage() {
        let list = ImmutableList::from(vec![1, 2, 3]);
        let copy = list.clone();
        assert!(std::ptr::eq(list.as_slice(), copy.as_slice()));
    }

    #[rstest]
    fn test_comparisons() {
        let list: ImmutableList<i32> = (1..=3).collect();
        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(list, [1, 2, 3]);
        assert_eq!(list, ImmutableList::from(&[1, 2, 3][..]));
        assert_ne!(list, ImmutableList::new());
    }

    #[rstest]
    fn test_owning_iteration_clones() {
        let list = ImmutableList::from(vec![String::from("a"), String::from("b")]);
        let owned: Vec<String> = list.clone().into_iter().collect();
        assert_eq!(owned, vec!["a", "b"]);
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn test_is_a_restartable_sequence() {
        let list = ImmutableList::from(vec![1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(drain(&list.skip(1)), [2, 3]);
    }

    #[rstest]
    fn test_debug_formats_as_list() {
        assert_eq!(format!("{:?}", ImmutableList::from(vec![1, 2])), "[1, 2]");
    }
}

//! A shared, singly-linked cons list.
//!
//! [`ConsList`] is the classic `nil`/`cons` list: prepending is O(1) and
//! shares the existing cells, so a list and every list built on top of it
//! can coexist without copying.
//!
//! ```rust
//! use seqkit::eager::ConsList;
//!
//! let tail = ConsList::nil().cons(3).cons(2);
//! let list = tail.cons(1);
//!
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.tail().as_ref(), Ok(&tail));
//! assert_eq!(list.fold(|sum, n| sum + n, 0), 6);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::{FunctionalError, Result};

struct Link<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// An immutable list made of shared cons cells.
///
/// `head` and `tail` of the empty list fail with
/// [`FunctionalError::Exhausted`] rather than returning a sentinel.
pub struct ConsList<T> {
    first: Option<Rc<Link<T>>>,
    length: usize,
}

impl<T> ConsList<T> {
    /// The empty list.
    #[inline]
    pub const fn nil() -> Self {
        Self {
            first: None,
            length: 0,
        }
    }

    /// A new list with `element` in front of `self`, sharing `self`'s cells.
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            first: Some(Rc::new(Link {
                element,
                next: self.first.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// The two-element list `(first second)`.
    pub fn pair(first: T, second: T) -> Self {
        Self::nil().cons(second).cons(first)
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Exhausted`] for the empty list.
    pub fn head(&self) -> Result<&T> {
        self.first
            .as_deref()
            .map(|cell| &cell.element)
            .ok_or_else(|| FunctionalError::exhausted("eager::ConsList::head"))
    }

    /// Everything after the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Exhausted`] for the empty list.
    pub fn tail(&self) -> Result<Self> {
        let cell = self
            .first
            .as_deref()
            .ok_or_else(|| FunctionalError::exhausted("eager::ConsList::tail"))?;
        Ok(Self {
            first: cell.next.clone(),
            length: self.length - 1,
        })
    }

    /// The second element.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Exhausted`] if there are fewer than two
    /// elements.
    pub fn second(&self) -> Result<&T> {
        self.iter()
            .nth(1)
            .ok_or_else(|| FunctionalError::exhausted("eager::ConsList::second"))
    }

    /// Iterates front to back.
    pub fn iter(&self) -> ConsIter<'_, T> {
        ConsIter {
            current: self.first.as_deref(),
        }
    }

    /// Left fold, front to back.
    pub fn fold<B, F>(&self, mut function: F, initial: B) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, |state, element| function(state, element))
    }

    /// Right fold, back to front.
    pub fn fold_right<B, F>(&self, mut function: F, initial: B) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(initial, |state, element| function(element, state))
    }

    /// A new list with `function` applied to every element.
    pub fn map<B, F>(&self, function: F) -> ConsList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T: Clone> ConsList<T> {
    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold(|reversed, element| reversed.cons(element.clone()), Self::nil())
    }

    /// The elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).cloned().collect()
    }
}

impl<T> Clone for ConsList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

// Unlinks uniquely owned cells one at a time so long lists do not recurse.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut next = self.first.take();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut owned) => owned.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut elements: Vec<T> = iterable.into_iter().collect();
        let mut list = Self::nil();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`ConsList`].
pub struct ConsIter<'a, T> {
    current: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for ConsIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.current?;
        self.current = cell.next.as_deref();
        Some(&cell.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nil_has_no_head_or_tail() {
        let empty: ConsList<i32> = ConsList::nil();
        assert!(empty.is_empty());
        assert_eq!(
            empty.head(),
            Err(FunctionalError::Exhausted {
                operation: "eager::ConsList::head"
            })
        );
        assert!(empty.tail().is_err());
    }

    #[rstest]
    fn test_cons_shares_the_tail() {
        let base: ConsList<i32> = vec![2, 3].into_iter().collect();
        let extended = base.cons(1);

        assert_eq!(extended.len(), 3);
        assert_eq!(extended.tail().unwrap(), base);
        assert_eq!(base.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_pair_and_second() {
        let pair = ConsList::pair('a', 'b');
        assert_eq!(pair.head(), Ok(&'a'));
        assert_eq!(pair.second(), Ok(&'b'));
        assert!(ConsList::nil().cons('a').second().is_err());
    }

    #[rstest]
    fn test_folds_run_in_opposite_directions() {
        let list: ConsList<&str> = vec!["a", "b", "c"].into_iter().collect();
        let left = list.fold(|text, element| format!("{text}{element}"), String::new());
        let right = list.fold_right(|element, text| format!("{text}{element}"), String::new());

        assert_eq!(left, "abc");
        assert_eq!(right, "cba");
    }

    #[rstest]
    fn test_reverse_filter_map() {
        let list: ConsList<i32> = (1..=6).collect();

        let reversed: ConsList<i32> = (1..=6).rev().collect();
        let evens: ConsList<i32> = vec![2, 4, 6].into_iter().collect();

        assert_eq!(list.reverse(), reversed);
        assert_eq!(list.filter(|n| n % 2 == 0), evens);
        assert_eq!(list.map(|n| n * 10).head(), Ok(&10));
    }

    #[rstest]
    fn test_long_list_drops_without_recursing() {
        let list: ConsList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}

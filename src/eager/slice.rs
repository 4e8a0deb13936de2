//! Prefix and suffix combinators.
//!
//! Eager [`take`] needs the full count and fails on a short input; eager
//! [`skip`] does not. The lazy [`seq::take`](crate::seq::take) yields
//! fewer elements instead of failing.

use super::ImmutableList;
use crate::error::{FunctionalError, Result};
use crate::seq::Once;

/// Returns the first `count` elements.
///
/// # Errors
///
/// Returns [`FunctionalError::Exhausted`] if the input has fewer than
/// `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::take(2, vec![1, 2, 3]).unwrap(), [1, 2]);
/// assert!(eager::take(4, vec![1, 2, 3]).is_err());
/// ```
pub fn take<T>(count: usize, input: impl IntoIterator<Item = T>) -> Result<ImmutableList<T>> {
    let items: Vec<T> = input.into_iter().take(count).collect();
    if items.len() < count {
        return Err(FunctionalError::exhausted("eager::take"));
    }
    Ok(ImmutableList::from(items))
}

/// Returns everything after the first `count` elements; never fails.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::skip(1, vec![1, 2, 3]), [2, 3]);
/// assert!(eager::skip(5, vec![1, 2, 3]).is_empty());
/// ```
pub fn skip<T>(count: usize, input: impl IntoIterator<Item = T>) -> ImmutableList<T> {
    input.into_iter().skip(count).collect()
}

/// Returns the longest prefix whose elements satisfy `predicate`.
pub fn take_while<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> ImmutableList<T>
where
    P: FnMut(&T) -> bool,
{
    input.into_iter().take_while(predicate).collect()
}

/// Drops the longest prefix whose elements satisfy `predicate`.
///
/// The first element that fails the predicate is kept.
pub fn skip_while<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> ImmutableList<T>
where
    P: FnMut(&T) -> bool,
{
    input.into_iter().skip_while(predicate).collect()
}

/// Splits off the first `count` elements and hands back the rest unread.
///
/// The continuation is a [`Once`] sequence positioned right after the
/// returned prefix: its first traversal reads the remaining elements, and
/// nothing past the prefix is consumed until then. A short input returns
/// every element in the prefix and an empty continuation.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
/// use seqkit::seq::Sequence;
///
/// let (head, rest) = eager::take_n_and_yield(2, vec![1, 2, 3, 4]);
/// assert_eq!(head, [1, 2]);
/// assert_eq!(rest.to_vec(), vec![3, 4]);
/// ```
pub fn take_n_and_yield<I>(count: usize, input: I) -> (ImmutableList<I::Item>, Once<I::IntoIter>)
where
    I: IntoIterator,
{
    let mut remaining = input.into_iter();
    let head = remaining.by_ref().take(count).collect();
    (head, crate::seq::once(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Sequence;
    use rstest::rstest;

    #[rstest]
    fn test_take_exact_length_succeeds() {
        assert_eq!(take(3, vec![1, 2, 3]), Ok(ImmutableList::from(vec![1, 2, 3])));
        assert_eq!(take(0, Vec::<i32>::new()), Ok(ImmutableList::new()));
    }

    #[rstest]
    fn test_take_short_input_fails_with_exhausted() {
        assert_eq!(
            take(2, vec![1]),
            Err(FunctionalError::exhausted("eager::take"))
        );
    }

    #[rstest]
    fn test_take_while_and_skip_while_split_input() {
        let input = vec![1, 2, 7, 3];
        let small = |n: &i32| *n < 5;
        assert_eq!(take_while(small, input.clone()), [1, 2]);
        assert_eq!(skip_while(small, input), [7, 3]);
    }

    #[rstest]
    fn test_take_n_and_yield_does_not_read_ahead() {
        let mut reads = 0;
        let source = (1..=5).inspect(|_| reads += 1);
        let (head, rest) = take_n_and_yield(2, source);
        assert_eq!(head, [1, 2]);
        drop(rest);
        assert_eq!(reads, 2);
    }

    #[rstest]
    fn test_take_n_and_yield_short_input() {
        let (head, rest) = take_n_and_yield(5, vec!['a']);
        assert_eq!(head, ['a']);
        assert!(rest.to_vec().is_empty());
    }
}

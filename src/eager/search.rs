//! Searches and quantifiers.
//!
//! `find`, `find_index`, `find_last` and `pick` must produce a result:
//! when nothing matches they fail with [`FunctionalError::NotFound`]. This
//! is different from an empty `Option`, which is a normal outcome.

use crate::error::{FunctionalError, Result};

/// Returns the first element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`FunctionalError::NotFound`] if no element matches.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::find(|n: &i32| *n > 2, vec![1, 3, 5]), Ok(3));
/// assert!(eager::find(|n: &i32| *n > 9, vec![1, 3, 5]).is_err());
/// ```
pub fn find<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> Result<T>
where
    P: FnMut(&T) -> bool,
{
    input
        .into_iter()
        .find(predicate)
        .ok_or_else(|| FunctionalError::not_found("eager::find"))
}

/// Returns the last element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`FunctionalError::NotFound`] if no element matches.
pub fn find_last<T, P>(mut predicate: P, input: impl IntoIterator<Item = T>) -> Result<T>
where
    P: FnMut(&T) -> bool,
{
    input
        .into_iter()
        .filter(|element| predicate(element))
        .last()
        .ok_or_else(|| FunctionalError::not_found("eager::find_last"))
}

/// Returns the 0-based position of the first element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`FunctionalError::NotFound`] if no element matches.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::find_index(|c: &char| c.is_uppercase(), "abCd".chars()), Ok(2));
/// ```
pub fn find_index<T, P>(mut predicate: P, input: impl IntoIterator<Item = T>) -> Result<usize>
where
    P: FnMut(&T) -> bool,
{
    input
        .into_iter()
        .position(|element| predicate(&element))
        .ok_or_else(|| FunctionalError::not_found("eager::find_index"))
}

/// Returns the first `Some` produced by `chooser`.
///
/// # Errors
///
/// Returns [`FunctionalError::NotFound`] if `chooser` never returns `Some`.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let first_number = eager::pick(|text: &str| text.parse::<u32>().ok(), ["a", "12", "7"]);
/// assert_eq!(first_number, Ok(12));
/// ```
pub fn pick<T, U, F>(chooser: F, input: impl IntoIterator<Item = T>) -> Result<U>
where
    F: FnMut(T) -> Option<U>,
{
    input
        .into_iter()
        .find_map(chooser)
        .ok_or_else(|| FunctionalError::not_found("eager::pick"))
}

/// Returns the last element.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if the input is empty.
pub fn last<T>(input: impl IntoIterator<Item = T>) -> Result<T> {
    input
        .into_iter()
        .last()
        .ok_or_else(|| FunctionalError::invalid_argument("eager::last", "input is empty"))
}

/// Returns `true` if any element satisfies `predicate`.
pub fn exists<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> bool
where
    P: FnMut(T) -> bool,
{
    input.into_iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty input satisfies any predicate.
pub fn for_all<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> bool
where
    P: FnMut(T) -> bool,
{
    input.into_iter().all(predicate)
}

/// Returns `true` if `predicate` holds for every pair of corresponding elements.
///
/// # Errors
///
/// Returns [`FunctionalError::LengthMismatch`] if the inputs differ in length.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::for_all2(|a: i32, b: i32| a < b, vec![1, 2], vec![3, 4]), Ok(true));
/// assert!(eager::for_all2(|a: i32, b: i32| a < b, vec![1, 2], vec![3]).is_err());
/// ```
pub fn for_all2<A, B, P>(
    mut predicate: P,
    first: impl IntoIterator<Item = A>,
    second: impl IntoIterator<Item = B>,
) -> Result<bool>
where
    P: FnMut(A, B) -> bool,
{
    let first: Vec<A> = first.into_iter().collect();
    let second: Vec<B> = second.into_iter().collect();
    if first.len() != second.len() {
        return Err(FunctionalError::length_mismatch("eager::for_all2"));
    }
    Ok(first
        .into_iter()
        .zip(second)
        .all(|(a, b)| predicate(a, b)))
}

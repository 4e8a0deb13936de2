//! Zipping and unzipping finite inputs.
//!
//! The eager zips require inputs of equal length and report a mismatch
//! before producing any output. The lazy [`seq::zip`](crate::seq::zip)
//! truncates to the shorter input instead.

use super::ImmutableList;
use crate::error::{FunctionalError, Result};

/// Pairs up corresponding elements of two equally long inputs.
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
/// let pairs = eager::zip(vec![1, 2], vec!['a', 'b']).unwrap();
/// assert_eq!(pairs, [(1, 'a'), (2, 'b')]);
///
/// assert!(eager::zip(vec![1, 2], vec!['a']).is_err());
/// ```
pub fn zip<A, B>(
    first: impl IntoIterator<Item = A>,
    second: impl IntoIterator<Item = B>,
) -> Result<ImmutableList<(A, B)>> {
    let first: Vec<A> = first.into_iter().collect();
    let second: Vec<B> = second.into_iter().collect();
    if first.len() != second.len() {
        return Err(FunctionalError::length_mismatch("eager::zip"));
    }
    Ok(first.into_iter().zip(second).collect())
}

/// Groups corresponding elements of three equally long inputs.
///
/// # Errors
///
/// Returns [`FunctionalError::LengthMismatch`] if the inputs differ in length.
pub fn zip3<A, B, C>(
    first: impl IntoIterator<Item = A>,
    second: impl IntoIterator<Item = B>,
    third: impl IntoIterator<Item = C>,
) -> Result<ImmutableList<(A, B, C)>> {
    let first: Vec<A> = first.into_iter().collect();
    let second: Vec<B> = second.into_iter().collect();
    let third: Vec<C> = third.into_iter().collect();
    if first.len() != second.len() || first.len() != third.len() {
        return Err(FunctionalError::length_mismatch("eager::zip3"));
    }
    Ok(first
        .into_iter()
        .zip(second)
        .zip(third)
        .map(|((a, b), c)| (a, b, c))
        .collect())
}

/// Splits a sequence of pairs into two lists.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let (numbers, letters) = eager::unzip(vec![(1, 'a'), (2, 'b')]);
/// assert_eq!(numbers, [1, 2]);
/// assert_eq!(letters, ['a', 'b']);
/// ```
pub fn unzip<A, B>(input: impl IntoIterator<Item = (A, B)>) -> (ImmutableList<A>, ImmutableList<B>) {
    let (first, second): (Vec<A>, Vec<B>) = input.into_iter().unzip();
    (ImmutableList::from(first), ImmutableList::from(second))
}

/// Splits a sequence of triples into three lists.
pub fn unzip3<A, B, C>(
    input: impl IntoIterator<Item = (A, B, C)>,
) -> (ImmutableList<A>, ImmutableList<B>, ImmutableList<C>) {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut third = Vec::new();
    for (a, b, c) in input {
        first.push(a);
        second.push(b);
        third.push(c);
    }
    (
        ImmutableList::from(first),
        ImmutableList::from(second),
        ImmutableList::from(third),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_zip3_requires_equal_lengths() {
        assert_eq!(
            zip3(vec![1], vec![2], vec![3, 4]),
            Err(FunctionalError::length_mismatch("eager::zip3"))
        );
        assert_eq!(zip3(vec![1], vec!['b'], vec!["c"]).unwrap(), [(1, 'b', "c")]);
    }

    #[rstest]
    fn test_unzip3_inverts_zip3() {
        let zipped = zip3(vec![1, 2], vec![3, 4], vec![5, 6]).unwrap();
        let (a, b, c) = unzip3(zipped);
        assert_eq!((a, b, c), (
            ImmutableList::from(vec![1, 2]),
            ImmutableList::from(vec![3, 4]),
            ImmutableList::from(vec![5, 6])
        ));
    }

    #[rstest]
    fn test_zip_of_empty_inputs() {
        assert_eq!(zip(Vec::<i32>::new(), Vec::<u8>::new()).map(|pairs| pairs.len()), Ok(0));
    }
}

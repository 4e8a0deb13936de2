//! Splitting and keying combinators.

use std::hash::Hash;

use indexmap::IndexMap;

use super::map::KeyedEntries;
use super::{ImmutableList, ImmutableMap, ImmutableSet};

/// Splits the input into the elements that satisfy `predicate` and those
/// that do not, keeping the input order within each part.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let (odd, even) = eager::partition(|n: &i32| n % 2 == 1, vec![3, 6, 9, 12, 15]);
/// assert_eq!(odd, [3, 9, 15]);
/// assert_eq!(even, [6, 12]);
/// ```
pub fn partition<T, P>(
    predicate: P,
    input: impl IntoIterator<Item = T>,
) -> (ImmutableList<T>, ImmutableList<T>)
where
    P: FnMut(&T) -> bool,
{
    let (matching, rest): (Vec<T>, Vec<T>) = input.into_iter().partition(predicate);
    (ImmutableList::from(matching), ImmutableList::from(rest))
}

/// Buckets the input by `key`.
///
/// Buckets appear in the order their key was first seen, and each bucket
/// keeps the input order of its elements.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let groups = eager::group_by(|word: &&str| word.len(), ["to", "be", "or", "not", "to", "be"]);
/// assert_eq!(groups[&2], ["to", "be", "or", "to", "be"]);
/// assert_eq!(groups[&3], ["not"]);
/// ```
pub fn group_by<T, K, F>(mut key: F, input: impl IntoIterator<Item = T>) -> ImmutableMap<K, ImmutableList<T>>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut buckets: KeyedEntries<K, Vec<T>> = IndexMap::default();
    for element in input {
        buckets.entry(key(&element)).or_default().push(element);
    }
    buckets
        .into_iter()
        .map(|(bucket_key, members)| (bucket_key, ImmutableList::from(members)))
        .collect()
}

/// Builds a map from the input with a key and a value function.
///
/// A later element with an existing key replaces the earlier value but
/// keeps the earlier position.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let lengths = eager::to_dictionary(|word: &&str| word.chars().next(), |word| word.len(), ["apple", "bean", "avocado"]);
/// assert_eq!(lengths.get(&Some('a')), Some(&7));
/// assert_eq!(lengths.len(), 2);
/// ```
pub fn to_dictionary<T, K, V, F, G>(
    mut key: F,
    mut value: G,
    input: impl IntoIterator<Item = T>,
) -> ImmutableMap<K, V>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
    G: FnMut(T) -> V,
{
    let mut dictionary: KeyedEntries<K, V> = IndexMap::default();
    for element in input {
        let element_key = key(&element);
        dictionary.insert(element_key, value(element));
    }
    ImmutableMap::from_entries(dictionary)
}

/// Collects the distinct elements of the input.
pub fn to_set<T>(input: impl IntoIterator<Item = T>) -> ImmutableSet<T>
where
    T: Hash + Eq,
{
    input.into_iter().collect()
}

//! Read-only keyed outputs: [`ImmutableMap`] and [`ImmutableSet`].

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;

/// The hasher shared by [`ImmutableMap`] and [`ImmutableSet`].
///
/// `std`'s `RandomState` by default; `rustc_hash::FxBuildHasher` with the
/// `fxhash` feature, `ahash::RandomState` with the `ahash` feature.
#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

/// The hasher used for the key index of keyed outputs.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

/// The hasher used for the key index of keyed outputs.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;

// =============================================================================
// ImmutableMap
// =============================================================================

pub(crate) type KeyedEntries<K, V> = IndexMap<K, V, KeyHasher>;

/// A read-only map that remembers the order in which keys first appeared.
///
/// Iteration yields entries in first-insertion order, which is how
/// [`group_by`](super::group_by) keeps its buckets in the order their keys
/// were first seen. Cloning shares the storage.
///
/// Indexing with `map[&key]` panics when `key` is absent, as it does for
/// `std::collections::HashMap`; use [`get`](Self::get) to test first.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let by_parity = eager::group_by(|n: &i32| n % 2 == 0, 1..=6);
/// let keys: Vec<&bool> = by_parity.keys().collect();
/// assert_eq!(keys, vec![&false, &true]);
/// assert_eq!(by_parity[&true], [2, 4, 6]);
/// ```
pub struct ImmutableMap<K, V> {
    entries: Rc<KeyedEntries<K, V>>,
}

impl<K, V> ImmutableMap<K, V> {
    pub(crate) fn from_entries(entries: KeyedEntries<K, V>) -> Self {
        Self {
            entries: Rc::new(entries),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in first-insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in first-insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over the values in the first-insertion order of their keys.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns the entry at `position` in first-insertion order.
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get_index(position)
    }
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V> Clone for ImmutableMap<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::from_entries(IndexMap::with_hasher(KeyHasher::default()))
    }
}

impl<K, V, Q> std::ops::Index<&Q> for ImmutableMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("ImmutableMap: key not present"),
        }
    }
}

/// Later duplicates overwrite the value but keep the first position.
impl<K: Hash + Eq, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        Self::from_entries(iterable.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Maps are equal when they hold the same keys with equal values,
/// regardless of order.
impl<K: Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.entries == *other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// ImmutableSet
// =============================================================================

/// A read-only hash set. Cloning shares the storage.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let distinct = eager::to_set(vec![3, 1, 3, 2, 1]);
/// assert_eq!(distinct.len(), 3);
/// assert!(distinct.contains(&2));
/// ```
pub struct ImmutableSet<T> {
    items: Rc<HashSet<T, KeyHasher>>,
}

impl<T> ImmutableSet<T> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> ImmutableSet<T> {
    /// Returns `true` if `value` is in the set.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(value)
    }
}

impl<T> Clone for ImmutableSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut items = HashSet::with_hasher(KeyHasher::default());
        items.extend(iterable);
        Self {
            items: Rc::new(items),
        }
    }
}

impl<T: Hash + Eq> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.items == *other.items
    }
}

impl<T: Hash + Eq> Eq for ImmutableSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_iter_last_write_wins_first_position() {
        let map: ImmutableMap<&str, i32> = vec![("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));
        let keys: Vec<&&str> = map.keys().collect();
        assert_eq!(keys, vec![&"a", &"b"]);
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let forward: ImmutableMap<i32, char> = vec![(1, 'x'), (2, 'y')].into_iter().collect();
        let backward: ImmutableMap<i32, char> = vec![(2, 'y'), (1, 'x')].into_iter().collect();
        assert_eq!(forward, backward);
    }

    #[rstest]
    fn test_values_follow_first_insertion_of_keys() {
        let map: ImmutableMap<char, u8> = vec![('z', 1), ('a', 2), ('z', 3)].into_iter().collect();
        let values: Vec<u8> = map.values().copied().collect();
        assert_eq!(values, vec![3, 2]);
        assert_eq!(map.get_index(0), Some((&'z', &3)));
    }

    #[rstest]
    #[should_panic(expected = "ImmutableMap: key not present")]
    fn test_index_of_missing_key_panics() {
        let map: ImmutableMap<&str, i32> = vec![("present", 1)].into_iter().collect();
        let _value = map["absent"];
    }

    #[rstest]
    fn test_missing_key() {
        let map: ImmutableMap<i32, i32> = ImmutableMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
        assert!(!map.contains_key(&1));
    }

    #[rstest]
    fn test_set_equality() {
        let first: ImmutableSet<i32> = vec![1, 2, 2].into_iter().collect();
        let second: ImmutableSet<i32> = vec![2, 1].into_iter().collect();
        assert_eq!(first, second);
    }
}

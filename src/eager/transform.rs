//! Element-wise eager combinators.

use super::ImmutableList;

/// Applies `function` to every element.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::map(|n: i32| n.to_string(), vec![1, 2]), ["1", "2"]);
/// ```
pub fn map<T, U, F>(function: F, input: impl IntoIterator<Item = T>) -> ImmutableList<U>
where
    F: FnMut(T) -> U,
{
    input.into_iter().map(function).collect()
}

/// Applies `function` to every element and its 0-based position.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let labelled = eager::mapi(|index, name: &str| format!("{index}:{name}"), ["a", "b"]);
/// assert_eq!(labelled, ["0:a", "1:b"]);
/// ```
pub fn mapi<T, U, F>(mut function: F, input: impl IntoIterator<Item = T>) -> ImmutableList<U>
where
    F: FnMut(usize, T) -> U,
{
    input
        .into_iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Keeps the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::filter(|n: &i32| n % 2 == 0, 1..=6), [2, 4, 6]);
/// ```
pub fn filter<T, P>(predicate: P, input: impl IntoIterator<Item = T>) -> ImmutableList<T>
where
    P: FnMut(&T) -> bool,
{
    input.into_iter().filter(predicate).collect()
}

/// Maps every element to an `Option` and keeps the `Some` payloads.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let parsed = eager::choose(|text: &str| text.parse::<i32>().ok(), ["4", "x", "2"]);
/// assert_eq!(parsed, [4, 2]);
/// ```
pub fn choose<T, U, F>(chooser: F, input: impl IntoIterator<Item = T>) -> ImmutableList<U>
where
    F: FnMut(T) -> Option<U>,
{
    input.into_iter().filter_map(chooser).collect()
}

/// Maps every element to an iterable and concatenates the results.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let repeated = eager::collect(|n: usize| vec![n; n], vec![1, 2, 3]);
/// assert_eq!(repeated, [1, 2, 2, 3, 3, 3]);
/// ```
pub fn collect<T, I, F>(function: F, input: impl IntoIterator<Item = T>) -> ImmutableList<I::Item>
where
    F: FnMut(T) -> I,
    I: IntoIterator,
{
    input.into_iter().flat_map(function).collect()
}

/// All elements of `first` followed by all elements of `second`.
pub fn concat<T>(
    first: impl IntoIterator<Item = T>,
    second: impl IntoIterator<Item = T>,
) -> ImmutableList<T> {
    first.into_iter().chain(second).collect()
}

/// Sorts a copy of the input with `compare`, keeping equal elements in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let by_length = eager::sort_with(|a: &&str, b: &&str| a.len().cmp(&b.len()), ["ccc", "a", "bb", "d"]);
/// assert_eq!(by_length, ["a", "d", "bb", "ccc"]);
/// ```
pub fn sort_with<T, F>(compare: F, input: impl IntoIterator<Item = T>) -> ImmutableList<T>
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    let mut items: Vec<T> = input.into_iter().collect();
    items.sort_by(compare);
    ImmutableList::from(items)
}

/// Renders every element with `render` and joins them with `separator`.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::join(", ", vec![1, 2, 3], |n| n.to_string()), "1, 2, 3");
/// ```
pub fn join<T, F>(separator: &str, input: impl IntoIterator<Item = T>, render: F) -> String
where
    F: FnMut(T) -> String,
{
    input.into_iter().map(render).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_preserves_order() {
        assert_eq!(map(|c: char| c.to_ascii_uppercase(), "abc".chars()), ['A', 'B', 'C']);
    }

    #[rstest]
    fn test_filter_of_empty_is_empty() {
        assert!(filter(|_: &i32| true, Vec::new()).is_empty());
    }

    #[rstest]
    fn test_choose_matches_map_then_flatten() {
        let chooser = |n: i32| (n > 1).then_some(n * 10);
        let chosen = choose(chooser, vec![1, 2, 3]);
        let mapped: Vec<i32> = map(chooser, vec![1, 2, 3]).iter().flatten().copied().collect();
        assert_eq!(chosen, mapped);
    }

    #[rstest]
    fn test_concat_and_join() {
        assert_eq!(concat(vec![1], vec![2, 3]), [1, 2, 3]);
        assert_eq!(join("-", Vec::<i32>::new(), |n| n.to_string()), "");
    }

    #[rstest]
    fn test_sort_with_is_stable() {
        let sorted = sort_with(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0), vec![(2, 'a'), (1, 'b'), (2, 'c')]);
        assert_eq!(sorted, [(1, 'b'), (2, 'a'), (2, 'c')]);
    }
}

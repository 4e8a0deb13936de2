//! Left folds.

use super::ImmutableList;

/// Folds the input from the left, starting at `initial`.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let total = eager::fold(|sum, n| sum + n, 0, vec![1, 2, 3, 4]);
/// assert_eq!(total, 10);
///
/// let digits = eager::fold(|text: String, n: i32| text + &n.to_string(), String::new(), 1..=3);
/// assert_eq!(digits, "123");
/// ```
pub fn fold<T, A, F>(function: F, initial: A, input: impl IntoIterator<Item = T>) -> A
where
    F: FnMut(A, T) -> A,
{
    input.into_iter().fold(initial, function)
}

/// Folds the input while choosing which elements to emit.
///
/// `function` receives the running state and an element and returns the
/// next state together with an optional output. Returns the final state
/// and every emitted output in order.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// // Emit a running total whenever it crosses a multiple of ten.
/// let (total, crossings) = eager::fold_and_choose(
///     |sum: i32, n: i32| {
///         let next = sum + n;
///         (next, (next / 10 > sum / 10).then_some(next))
///     },
///     0,
///     vec![4, 4, 4, 9, 1],
/// );
/// assert_eq!(total, 22);
/// assert_eq!(crossings, [12, 21]);
/// ```
pub fn fold_and_choose<T, A, U, F>(
    mut function: F,
    initial: A,
    input: impl IntoIterator<Item = T>,
) -> (A, ImmutableList<U>)
where
    F: FnMut(A, T) -> (A, Option<U>),
{
    let mut chosen = Vec::new();
    let state = input.into_iter().fold(initial, |state, element| {
        let (next, output) = function(state, element);
        chosen.extend(output);
        next
    });
    (state, ImmutableList::from(chosen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fold_is_left_associative() {
        let rendered = fold(|acc: String, n: i32| format!("({acc}-{n})"), String::from("0"), vec![1, 2]);
        assert_eq!(rendered, "((0-1)-2)");
    }

    #[rstest]
    fn test_fold_of_empty_returns_initial() {
        assert_eq!(fold(|acc: i32, n: i32| acc * n, 7, Vec::new()), 7);
    }

    #[rstest]
    fn test_fold_and_choose_without_outputs() {
        let (count, chosen) = fold_and_choose(|count: usize, _: char| (count + 1, None::<char>), 0, "abc".chars());
        assert_eq!(count, 3);
        assert!(chosen.is_empty());
    }
}

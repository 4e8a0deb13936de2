//! Generated lists.
//!
//! Generators passed to [`init`] receive a 1-based index. [`range`] builds
//! such a generator for a run of consecutive integers.

use super::ImmutableList;
use crate::error::{FunctionalError, Result};

/// The list `generator(1)`, ..., `generator(how_many)`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if `how_many` is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::init(|index| 2 * index, 5).unwrap(), [2, 4, 6, 8, 10]);
/// ```
pub fn init<T, F>(generator: F, how_many: usize) -> Result<ImmutableList<T>>
where
    F: FnMut(usize) -> T,
{
    if how_many == 0 {
        return Err(FunctionalError::invalid_argument(
            "eager::init",
            "how_many must be at least 1",
        ));
    }
    Ok((1..=how_many).map(generator).collect())
}

/// A generator for [`init`] that counts up from `start`.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// assert_eq!(eager::init(eager::range(-2), 5).unwrap(), [-2, -1, 0, 1, 2]);
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn range(start: isize) -> impl Fn(usize) -> isize {
    move |index| start + (index as isize - 1)
}

/// A list holding `how_many` copies of `value`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidArgument`] if `how_many` is zero.
pub fn constant<T: Clone>(value: T, how_many: usize) -> Result<ImmutableList<T>> {
    if how_many == 0 {
        return Err(FunctionalError::invalid_argument(
            "eager::constant",
            "how_many must be at least 1",
        ));
    }
    Ok(std::iter::repeat_n(value, how_many).collect())
}

/// Generates elements from `seed` until `stop` holds for the current state.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let doubles = eager::unfold(|state: i32| (state * 2, state + 1), |state| *state > 10, 1);
/// assert_eq!(doubles, [2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
/// ```
pub fn unfold<St, T, F, P>(mut step: F, mut stop: P, seed: St) -> ImmutableList<T>
where
    F: FnMut(St) -> (T, St),
    P: FnMut(&St) -> bool,
{
    let mut items = Vec::new();
    let mut state = seed;
    while !stop(&state) {
        let (element, next) = step(state);
        items.push(element);
        state = next;
    }
    ImmutableList::from(items)
}

/// Generates elements from `seed` until `step` returns `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
///
/// let digits = eager::unfold_option(|n: u32| (n > 0).then(|| (n % 10, n / 10)), 472);
/// assert_eq!(digits, [2, 7, 4]);
/// ```
pub fn unfold_option<St, T, F>(step: F, seed: St) -> ImmutableList<T>
where
    F: FnMut(St) -> Option<(T, St)>,
{
    let mut step = step;
    let mut items = Vec::new();
    let mut state = seed;
    while let Some((element, next)) = step(state) {
        items.push(element);
        state = next;
    }
    ImmutableList::from(items)
}

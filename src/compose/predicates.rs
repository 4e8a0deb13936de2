//! Stateless predicates and folding functions for use with the sequence
//! combinators.
//!
//! The unary predicates take their argument by reference so they can be
//! passed straight to `filter`, `partition`, `exists` and friends; the
//! folding functions match the `(state, element)` shape that `fold` expects.
//!
//! ```
//! use seqkit::compose::{count, greater_than, is_even, sum};
//! use seqkit::eager;
//!
//! let values = vec![1, 2, 3, 4, 5, 6];
//!
//! assert_eq!(eager::filter(is_even, values.clone()), [2, 4, 6]);
//! assert_eq!(eager::fold(sum, 0, values.clone()), 21);
//! assert_eq!(eager::fold(count, 0, eager::filter(greater_than(4), values)), 2);
//! ```

use std::ops::{Add, Rem};

/// Returns `true` for values divisible by two.
#[inline]
pub fn is_even<T>(value: &T) -> bool
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    *value % T::from(2) == T::from(0)
}

/// Returns `true` for values not divisible by two, negative ones included.
#[inline]
pub fn is_odd<T>(value: &T) -> bool
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    !is_even(value)
}

/// Adds `value` to the running total.
#[inline]
pub fn sum<T: Add<Output = T>>(state: T, value: T) -> T {
    state + value
}

/// Counts one more element, ignoring its value.
#[inline]
pub fn count<T>(state: usize, _value: T) -> usize {
    state + 1
}

/// Builds a predicate accepting values strictly greater than `bound`.
#[inline]
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value > bound
}

/// Builds a predicate accepting values greater than or equal to `bound`.
#[inline]
pub fn greater_than_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value >= bound
}

/// Builds a predicate accepting values strictly less than `bound`.
#[inline]
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value < bound
}

/// Builds a predicate accepting values less than or equal to `bound`.
#[inline]
pub fn less_than_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value <= bound
}

/// Returns `true` when `value` lies strictly inside `(lower_bound, upper_bound)`.
///
/// Both bounds are excluded.
///
/// ```
/// use seqkit::compose::between;
///
/// assert!(between(1, 4, 3));
/// assert!(!between(1, 4, 1));
/// assert!(between(1.0, 4.0, 2.55));
/// ```
#[inline]
pub fn between<T: PartialOrd>(lower_bound: T, upper_bound: T, value: T) -> bool {
    lower_bound < value && value < upper_bound
}

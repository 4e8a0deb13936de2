//! Helpers that give `std::option::Option` the operations of a
//! zero-or-one container.
//!
//! Rust's `Option` already models "no value" versus "has value", compares
//! equal when both sides are `None` or both hold equal payloads, and is
//! immutable once built. This module adds what it lacks:
//!
//! - [`OptionExt::try_some`]: reads the payload, failing with
//!   [`FunctionalError::NoValueAccess`] on `None` instead of panicking
//! - [`OptionExt::bind`]: monadic bind
//! - [`lift`]: combines two options with a binary function
//! - [`to_option`] / [`some`] / [`none`]: constructors
//! - [`all_some`], [`all_none`], [`are_some`], [`are_none`], [`somes`]:
//!   queries over many options at once
//!
//! # Examples
//!
//! ```rust
//! use seqkit::control::option::{self, OptionExt};
//! use seqkit::error::FunctionalError;
//!
//! let total = option::lift(|a: i32, b: i32| a + b, Some(2), Some(3));
//! assert_eq!(total.try_some(), Ok(5));
//!
//! let missing: Option<i32> = option::none();
//! assert_eq!(missing.try_some(), Err(FunctionalError::NoValueAccess));
//! ```

use crate::error::{FunctionalError, Result};

/// Extension methods for `Option`.
pub trait OptionExt<T> {
    /// Returns the payload, or [`FunctionalError::NoValueAccess`] if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::NoValueAccess`] when called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::control::OptionExt;
    ///
    /// assert_eq!(Some(7).try_some(), Ok(7));
    /// assert!(None::<i32>.try_some().is_err());
    /// ```
    fn try_some(self) -> Result<T>;

    /// Borrowing form of [`OptionExt::try_some`].
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::NoValueAccess`] when called on `None`.
    fn try_some_ref(&self) -> Result<&T>;

    /// Applies `function` to the payload and returns its result directly.
    ///
    /// `None` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::control::OptionExt;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
    /// assert_eq!(Some(8).bind(half), Some(4));
    /// assert_eq!(Some(7).bind(half), None);
    /// ```
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn try_some(self) -> Result<T> {
        self.ok_or(FunctionalError::NoValueAccess)
    }

    #[inline]
    fn try_some_ref(&self) -> Result<&T> {
        self.as_ref().ok_or(FunctionalError::NoValueAccess)
    }

    #[inline]
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(function)
    }
}

/// Converts a possibly-absent value into an `Option`.
///
/// Anything that converts into `Option<T>` is accepted, so both a bare
/// value and an existing `Option` work.
///
/// # Examples
///
/// ```rust
/// use seqkit::control::option::to_option;
///
/// assert_eq!(to_option(3_i32), Some(3));
/// assert_eq!(to_option::<i32>(None), None);
/// ```
#[inline]
pub fn to_option<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Wraps a value that is present by construction.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Returns the empty option.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// Combines two options with `function`.
///
/// Returns `Some(function(a, b))` when both inputs hold a value and `None`
/// otherwise. `function` is never called unless both are populated.
///
/// # Examples
///
/// ```rust
/// use seqkit::control::option::lift;
///
/// assert_eq!(lift(|a: i32, b: i32| a * b, Some(6), Some(7)), Some(42));
/// assert_eq!(lift(|a: i32, b: i32| a * b, None, Some(7)), None);
/// ```
#[inline]
pub fn lift<A, B, C, F>(function: F, first: Option<A>, second: Option<B>) -> Option<C>
where
    F: FnOnce(A, B) -> C,
{
    match (first, second) {
        (Some(a), Some(b)) => Some(function(a, b)),
        _ => None,
    }
}

/// Free-function form of [`OptionExt::bind`].
#[inline]
pub fn bind<T, U, F>(function: F, value: Option<T>) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    value.and_then(function)
}

// =============================================================================
// Many options
// =============================================================================

/// Returns `true` if no element is `None`.
///
/// An empty input is vacuously all-`Some`.
///
/// ```rust
/// use seqkit::control::option::all_some;
///
/// assert!(all_some(vec![Some(1), Some(2)]));
/// assert!(!all_some(vec![Some(1), None]));
/// ```
pub fn all_some<T>(input: impl IntoIterator<Item = Option<T>>) -> bool {
    input.into_iter().all(|value| value.is_some())
}

/// Returns `true` if no element is `Some`.
pub fn all_none<T>(input: impl IntoIterator<Item = Option<T>>) -> bool {
    input.into_iter().all(|value| value.is_none())
}

/// Keeps the `Some` elements, still wrapped.
///
/// See [`seq::are_some`](crate::seq::are_some) for the lazy form.
#[cfg(feature = "eager")]
pub fn are_some<T>(input: impl IntoIterator<Item = Option<T>>) -> crate::eager::ImmutableList<Option<T>> {
    input.into_iter().filter(Option::is_some).collect()
}

/// Keeps the `None` elements.
///
/// See [`seq::are_none`](crate::seq::are_none) for the lazy form.
#[cfg(feature = "eager")]
pub fn are_none<T>(input: impl IntoIterator<Item = Option<T>>) -> crate::eager::ImmutableList<Option<T>> {
    input.into_iter().filter(Option::is_none).collect()
}

/// Unwraps every element.
///
/// Usually applied to the output of [`are_some`]. To drop the `None`
/// elements instead of failing on them, use
/// [`eager::choose`](crate::eager::choose) with the identity function.
///
/// # Errors
///
/// Returns [`FunctionalError::NoValueAccess`] at the first `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::control::option::{are_some, somes};
/// use seqkit::error::FunctionalError;
///
/// let readings = vec![None, Some(4), None, Some(9)];
/// assert_eq!(somes(are_some(readings.clone())).unwrap(), [4, 9]);
/// assert_eq!(somes(readings), Err(FunctionalError::NoValueAccess));
/// ```
#[cfg(feature = "eager")]
pub fn somes<T>(input: impl IntoIterator<Item = Option<T>>) -> Result<crate::eager::ImmutableList<T>> {
    input.into_iter().map(OptionExt::try_some).collect()
}

//! Mapping over the element of a zero-or-one container.
//!
//! `fmap` transforms the element if there is one and keeps the container's
//! state otherwise: an empty `Option` stays empty and a failed
//! [`ExceptionResult`](crate::control::ExceptionResult) keeps its failure.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqkit::typeclass::Functor;
//!
//! let width: Option<&str> = Some("80");
//! assert_eq!(width.fmap(str::len), Some(2));
//! assert_eq!(None::<&str>.fmap(str::len), None);
//! ```

use super::higher::TypeConstructor;

/// A container whose element can be transformed in place.
pub trait Functor: TypeConstructor {
    /// Transforms the element, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Transforms a borrowed element, leaving the container untouched.
    ///
    /// ```rust
    /// use seqkit::typeclass::Functor;
    ///
    /// let name = Some(String::from("cursor"));
    /// assert_eq!(name.fmap_ref(String::len), Some(6));
    /// assert_eq!(name.as_deref(), Some("cursor"));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Swaps the element for `value`, keeping an empty or failed state.
    ///
    /// ```rust
    /// use seqkit::typeclass::Functor;
    ///
    /// assert_eq!(Functor::replace(Some(1), 'x'), Some('x'));
    /// assert_eq!(Functor::replace(None::<i32>, 'x'), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value)
    }

    /// Forgets the element.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(drop)
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(20), Some(21))]
    #[case(None, None)]
    fn test_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|value| value + 1), expected);
    }

    #[rstest]
    fn test_fmap_of_none_skips_the_function() {
        let calls = Cell::new(0);
        let mapped = None::<u8>.fmap(|value| {
            calls.set(calls.get() + 1);
            value
        });

        assert_eq!(mapped, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_void_keeps_presence() {
        assert_eq!(Some("gone").void(), Some(()));
        assert_eq!(None::<&str>.void(), None);
    }
}

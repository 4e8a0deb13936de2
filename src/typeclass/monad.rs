//! Chaining dependent steps.
//!
//! `flat_map` is `bind`: the next step runs only when the current container
//! holds an element, and its container is returned as is rather than nested.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! m.flat_map(pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqkit::typeclass::Monad;
//!
//! fn port(text: &str) -> Option<u16> {
//!     text.parse().ok().filter(|&port| port != 0)
//! }
//!
//! assert_eq!(Some("8080").flat_map(port), Some(8080));
//! assert_eq!(Some("0").flat_map(port), None);
//! assert_eq!(None::<&str>.flat_map(port), None);
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] whose next step may depend on the current element.
pub trait Monad: Applicative {
    /// Feeds the element to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Same as [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Runs `next` after `self`, keeping only `next`'s element.
    ///
    /// An empty or failed `self` wins and `next` is dropped.
    ///
    /// ```rust
    /// use seqkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some('b')), Some('b'));
    /// assert_eq!(None::<i32>.then(Some('b')), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(move |_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reciprocal(value: f64) -> Option<f64> {
        (value != 0.0).then(|| 1.0 / value)
    }

    #[rstest]
    #[case(Some(4.0), Some(0.25))]
    #[case(Some(0.0), None)]
    #[case(None, None)]
    fn test_flat_map(#[case] input: Option<f64>, #[case] expected: Option<f64>) {
        assert_eq!(input.flat_map(reciprocal), expected);
    }

    #[rstest]
    fn test_flat_map_of_none_skips_the_function() {
        let mut calls = 0;
        let result = None::<i32>.flat_map(|value| {
            calls += 1;
            Some(value)
        });

        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_and_then_through_the_trait() {
        assert_eq!(Monad::and_then(Some(2.0), reciprocal), Some(0.5));
    }
}

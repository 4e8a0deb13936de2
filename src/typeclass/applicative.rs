//! Combining two independent containers.
//!
//! `pure` wraps a plain value; `map2` runs a binary function only when both
//! containers hold an element. `map2` is what the `lift` helpers of
//! [`control::option`](crate::control::option) and
//! [`control::exception_result`](crate::control::exception_result) are
//! built on.
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```

use super::functor::Functor;

/// A [`Functor`] that can wrap plain values and zip two containers together.
///
/// ```rust
/// use seqkit::typeclass::Applicative;
///
/// let area = Some(3).map2(Some(4), |width, height| width * height);
/// assert_eq!(area, Some(12));
/// assert_eq!(Some(3).map2(None::<i32>, |width, height| width * height), None);
/// ```
pub trait Applicative: Functor {
    /// Wraps `value` in a container that holds it.
    ///
    /// The receiver type only selects the container; its element type is
    /// irrelevant, so `<Option<()>>::pure(5)` is `Some(5)`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to both elements, or keeps the first empty or
    /// failed state encountered.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs both elements.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(first, second)| function(first, second))
    }
}

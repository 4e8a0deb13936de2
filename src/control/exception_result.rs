//! A container that holds either a computed value or the failure raised
//! while computing it.
//!
//! `ExceptionResult<T>` turns failures into data. A producer runs once, when
//! the result is built; if it returns `Err` or panics, the failure is stored
//! instead of propagating. The failure only becomes visible again through
//! [`ExceptionResult::read`] or [`ExceptionResult::into_result`], or when a
//! later [`bind`](ExceptionResult::bind) or [`lift`] short-circuits on it.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::control::exception_result::{self, ExceptionResult};
//!
//! let parsed = exception_result::try_to_result(|| "21".parse::<i32>());
//! let doubled = parsed.bind(|n| exception_result::to_result(move || n * 2));
//! assert_eq!(doubled.read().ok(), Some(&42));
//!
//! let broken = exception_result::try_to_result(|| "x".parse::<i32>());
//! let never_run = broken.bind(|n| exception_result::to_result(move || n * 2));
//! assert!(never_run.has_exception());
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use thiserror::Error;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

// =============================================================================
// CapturedFailure
// =============================================================================

/// A failure stored inside an [`ExceptionResult`].
///
/// Cloning is cheap: raised errors are shared behind an `Arc`.
#[derive(Debug, Clone, Error)]
pub enum CapturedFailure {
    /// The producer returned an error.
    #[error(transparent)]
    Raised(Arc<dyn StdError + Send + Sync>),

    /// The producer panicked.
    #[error("producer panicked: {message}")]
    Panicked {
        /// The panic payload, if it was a string.
        message: String,
    },
}

impl CapturedFailure {
    /// Wraps an error returned by a producer.
    pub fn raised<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Raised(Arc::new(error))
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("non-string panic payload"));
        Self::Panicked { message }
    }

    /// Returns `true` if the failure was a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns the raised error as a concrete type, if it is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::control::exception_result::try_to_result;
    /// use std::num::ParseIntError;
    ///
    /// let result = try_to_result(|| "oops".parse::<i32>());
    /// let failure = result.exception().cloned();
    /// assert!(failure.as_ref().and_then(|f| f.downcast_ref::<ParseIntError>()).is_some());
    /// ```
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Raised(error) => error.downcast_ref::<E>(),
            Self::Panicked { .. } => None,
        }
    }
}

// =============================================================================
// ExceptionResult
// =============================================================================

/// Either a successfully produced value or a captured failure.
///
/// Exactly one of the two is present. Build it with [`to_result`] or
/// [`try_to_result`]; chain it with [`bind`](Self::bind) and [`lift`].
#[derive(Clone)]
pub struct ExceptionResult<T> {
    outcome: Result<T, CapturedFailure>,
}

impl<T> ExceptionResult<T> {
    /// Creates a result holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    /// Creates a result holding `failure`.
    pub fn failure(failure: CapturedFailure) -> Self {
        diagnostic!(trace, "captured failure", failure = %failure);
        Self {
            outcome: Err(failure),
        }
    }

    /// Returns `true` if a failure is stored.
    #[inline]
    pub const fn has_exception(&self) -> bool {
        self.outcome.is_err()
    }

    /// Returns `true` if a value is stored.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the value, or the stored failure.
    ///
    /// # Errors
    ///
    /// Returns a clone of the captured failure when there is no value.
    #[inline]
    pub fn read(&self) -> Result<&T, CapturedFailure> {
        self.outcome.as_ref().map_err(Clone::clone)
    }

    /// Consumes the result, returning the value or the stored failure.
    ///
    /// # Errors
    ///
    /// Returns the captured failure when there is no value.
    #[inline]
    pub fn into_result(self) -> Result<T, CapturedFailure> {
        self.outcome
    }

    /// Returns the stored failure, if any.
    #[inline]
    pub const fn exception(&self) -> Option<&CapturedFailure> {
        match &self.outcome {
            Ok(_) => None,
            Err(failure) => Some(failure),
        }
    }

    /// Discards the failure, keeping only a value if there is one.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.outcome.ok()
    }

    /// Chains a computation that may itself fail.
    ///
    /// A stored failure propagates unchanged and `function` is not called.
    /// Otherwise the result of `function` becomes the new state, including a
    /// panic raised inside it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::control::exception_result::{to_result, ExceptionResult};
    ///
    /// let result = to_result(|| 4).bind(|n| ExceptionResult::success(n + 1));
    /// assert_eq!(result.read().ok(), Some(&5));
    /// ```
    pub fn bind<U, F>(self, function: F) -> ExceptionResult<U>
    where
        F: FnOnce(T) -> ExceptionResult<U>,
    {
        match self.outcome {
            Ok(value) => match catch_unwind(AssertUnwindSafe(move || function(value))) {
                Ok(next) => next,
                Err(payload) => ExceptionResult::failure(CapturedFailure::from_panic(payload.as_ref())),
            },
            Err(failure) => ExceptionResult {
                outcome: Err(failure),
            },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ExceptionResult<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => formatter.debug_tuple("Success").field(value).finish(),
            Err(failure) => formatter.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

impl<T> From<T> for ExceptionResult<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Runs `producer` and stores its value, or the panic it raised.
///
/// # Examples
///
/// ```rust
/// use seqkit::control::exception_result::to_result;
///
/// assert!(to_result(|| 1 + 1).has_value());
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(to_result(|| empty[0]).has_exception());
/// ```
pub fn to_result<T, F>(producer: F) -> ExceptionResult<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(producer)) {
        Ok(value) => ExceptionResult::success(value),
        Err(payload) => ExceptionResult::failure(CapturedFailure::from_panic(payload.as_ref())),
    }
}

/// Runs a fallible `producer` and stores its value, its error, or its panic.
pub fn try_to_result<T, E, F>(producer: F) -> ExceptionResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: StdError + Send + Sync + 'static,
{
    match catch_unwind(AssertUnwindSafe(producer)) {
        Ok(Ok(value)) => ExceptionResult::success(value),
        Ok(Err(error)) => ExceptionResult::failure(CapturedFailure::raised(error)),
        Err(payload) => ExceptionResult::failure(CapturedFailure::from_panic(payload.as_ref())),
    }
}

/// Combines two results with `function`.
///
/// If either input holds a failure, the first failure found (checking
/// `first` before `second`) is returned and `function` is not called.
///
/// # Examples
///
/// ```rust
/// use seqkit::control::exception_result::{lift, to_result};
///
/// let sum = lift(|a: i32, b: i32| a + b, to_result(|| 1), to_result(|| 2));
/// assert_eq!(sum.read().ok(), Some(&3));
/// ```
pub fn lift<A, B, C, F>(
    function: F,
    first: ExceptionResult<A>,
    second: ExceptionResult<B>,
) -> ExceptionResult<C>
where
    F: FnOnce(A, B) -> C,
{
    match (first.outcome, second.outcome) {
        (Ok(a), Ok(b)) => to_result(move || function(a, b)),
        (Err(failure), _) | (_, Err(failure)) => ExceptionResult {
            outcome: Err(failure),
        },
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<T> TypeConstructor for ExceptionResult<T> {
    type Inner = T;
    type WithType<B> = ExceptionResult<B>;
}

impl<T> Functor for ExceptionResult<T> {
    fn fmap<B, F>(self, function: F) -> ExceptionResult<B>
    where
        F: FnOnce(T) -> B,
    {
        self.bind(|value| to_result(move || function(value)))
    }

    fn fmap_ref<B, F>(&self, function: F) -> ExceptionResult<B>
    where
        F: FnOnce(&T) -> B,
    {
        match &self.outcome {
            Ok(value) => to_result(|| function(value)),
            Err(failure) => ExceptionResult {
                outcome: Err(failure.clone()),
            },
        }
    }
}

impl<T> Applicative for ExceptionResult<T> {
    #[inline]
    fn pure<B>(value: B) -> ExceptionResult<B> {
        ExceptionResult::success(value)
    }

    fn map2<B, C, F>(self, other: ExceptionResult<B>, function: F) -> ExceptionResult<C>
    where
        F: FnOnce(T, B) -> C,
    {
        lift(function, self, other)
    }
}

impl<T> Monad for ExceptionResult<T> {
    fn flat_map<B, F>(self, function: F) -> ExceptionResult<B>
    where
        F: FnOnce(T) -> ExceptionResult<B>,
    {
        self.bind(function)
    }
}

//! Error types shared by every area of the crate.
//!
//! All fail-fast conditions (bad arguments, searches that find nothing,
//! exhausted cursors, length mismatches, unsupported mutation) are reported
//! through [`FunctionalError`]. Failures captured by
//! [`ExceptionResult`](crate::control::ExceptionResult) are a different
//! category: they are carried as data and live in
//! [`CapturedFailure`](crate::control::CapturedFailure).
//!
//! # Examples
//!
//! ```rust
//! use seqkit::error::FunctionalError;
//!
//! let error = FunctionalError::invalid_argument("seq::every_nth", "step must be greater than zero");
//! assert_eq!(
//!     error.to_string(),
//!     "seq::every_nth: invalid argument: step must be greater than zero"
//! );
//! ```

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, FunctionalError>;

/// The taxonomy of synchronous failures raised by this crate.
///
/// Every variant names the call site (`operation`) that failed so that a
/// caller handling the error can tell, say, an eager `take` shortfall from
/// a cursor read past its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionalError {
    /// An argument was rejected before any element was consumed.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A search that must produce a result found no matching element.
    #[error("{operation}: no element satisfies the condition")]
    NotFound {
        /// The search operation.
        operation: &'static str,
    },

    /// The payload of an empty `Option` was requested.
    #[error("attempted to read the value of an empty Option")]
    NoValueAccess,

    /// An element was requested from a source that has none left.
    #[error("{operation}: no more elements")]
    Exhausted {
        /// The operation that ran out of elements.
        operation: &'static str,
    },

    /// Inputs that must be the same length were not.
    #[error("{operation}: inputs have differing numbers of elements")]
    LengthMismatch {
        /// The operation that compared the lengths.
        operation: &'static str,
    },

    /// The structure does not support the requested operation.
    #[error("{operation}: unsupported operation: {reason}")]
    UnsupportedOperation {
        /// The structure or cursor that refused.
        operation: &'static str,
        /// Why it refused.
        reason: &'static str,
    },
}

impl FunctionalError {
    /// Creates an [`FunctionalError::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
        diagnostic!(debug, "rejected argument", operation = operation, reason = reason);
        Self::InvalidArgument { operation, reason }
    }

    /// Creates a [`FunctionalError::NotFound`].
    pub fn not_found(operation: &'static str) -> Self {
        diagnostic!(debug, "search found nothing", operation = operation);
        Self::NotFound { operation }
    }

    /// Creates a [`FunctionalError::Exhausted`].
    pub fn exhausted(operation: &'static str) -> Self {
        diagnostic!(debug, "source exhausted", operation = operation);
        Self::Exhausted { operation }
    }

    /// Creates a [`FunctionalError::LengthMismatch`].
    pub fn length_mismatch(operation: &'static str) -> Self {
        diagnostic!(debug, "length mismatch", operation = operation);
        Self::LengthMismatch { operation }
    }

    /// Creates a [`FunctionalError::UnsupportedOperation`].
    pub fn unsupported(operation: &'static str, reason: &'static str) -> Self {
        diagnostic!(debug, "unsupported operation", operation = operation, reason = reason);
        Self::UnsupportedOperation { operation, reason }
    }

    /// Returns the name of the operation that failed, if the variant records one.
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::NotFound { operation }
            | Self::Exhausted { operation }
            | Self::LengthMismatch { operation }
            | Self::UnsupportedOperation { operation, .. } => Some(*operation),
            Self::NoValueAccess => None,
        }
    }
}

//! # seqkit
//!
//! Higher-order sequence operations for Rust, in two flavours that produce
//! identical outputs: eager combinators that materialize their result, and
//! lazy, pull-based adapters that compose without building intermediate
//! collections.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over the crate's
//!   zero-or-one containers
//! - **Control Structures**: `Option` helpers and [`ExceptionResult`](control::ExceptionResult),
//!   a container that captures a failure instead of propagating it
//! - **Lazy Sequences**: restartable adapters (`map`, `filter`, `choose`,
//!   `collect`, `zip`, `take`, `skip`, `unfold`, ...) that hand out
//!   single-use cursors
//! - **Eager Combinators**: the same operations over finite inputs, plus
//!   `fold`, `partition`, `group_by`, `unzip`, `to_dictionary`, `find`, ...
//! - **Function Composition**: `then`, currying, predicates such as `is_even`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Option` helpers and `ExceptionResult`
//! - `seq`: Lazy sequence adapters
//! - `eager`: Eager combinators
//! - `compose`: Function composition utilities and predicates
//! - `serde`: `Serialize`/`Deserialize` for `Range`
//! - `fxhash` / `ahash`: faster hasher for keyed outputs
//! - `tracing`: debug events when a fail-fast error is raised
//! - `full`: Enable all areas plus `serde`
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let evens = seq::of(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|value: &i32| value % 2 == 0)
//!     .map(|value| value * 10);
//!
//! assert_eq!(evens.to_vec(), vec![20, 40, 60]);
//! // Adapters are restartable: iterating again starts from the beginning.
//! assert_eq!(evens.to_vec(), vec![20, 40, 60]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event when the `tracing` feature is enabled, and
/// nothing otherwise.
macro_rules! diagnostic {
    ($level:ident, $message:literal $(, $($field:tt)*)?) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($($field)*,)? $message);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FunctionalError, Result};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::{self, Cursor, Elements, Sequence};

    #[cfg(feature = "eager")]
    pub use crate::eager::{self, ImmutableList, ImmutableMap, Range};
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "eager")]
pub mod eager;

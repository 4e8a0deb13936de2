//! Zero-or-one containers with short-circuiting composition.
//!
//! - [`option`]: helpers for `std::option::Option` ([`OptionExt`], `lift`,
//!   `to_option`)
//! - [`ExceptionResult`]: a value or the failure raised while computing it
//!
//! Both containers implement the [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad) type classes, so `bind` and `lift`
//! are available generically as `flat_map` and `map2`.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::control::{exception_result, option};
//!
//! let both = option::lift(|a: i32, b: i32| a + b, Some(1), Some(2));
//! assert_eq!(both, Some(3));
//!
//! let parsed = exception_result::try_to_result(|| "ten".parse::<i32>());
//! assert!(parsed.has_exception());
//! ```

pub mod exception_result;
pub mod option;

pub use exception_result::{CapturedFailure, ExceptionResult};
pub use option::OptionExt;

//! Type classes for the crate's zero-or-one containers.
//!
//! - [`TypeConstructor`]: names "the same container, other element type"
//! - [`Functor`]: `fmap`
//! - [`Applicative`]: `pure` and `map2` (the `lift` of two containers)
//! - [`Monad`]: `flat_map` (the `bind` of a container and a step)
//!
//! Instances exist for `Option` and, with the `control` feature, for
//! [`ExceptionResult`](crate::control::ExceptionResult).
//!
//! ```rust
//! use seqkit::typeclass::{Applicative, Monad};
//!
//! let total = Some(1).map2(Some(2), |a, b| a + b);
//! let halved = total.flat_map(|n| (n % 2 == 0).then(|| n / 2));
//! assert_eq!(total, Some(3));
//! assert_eq!(halved, None);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

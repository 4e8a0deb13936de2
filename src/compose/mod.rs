//! Function composition utilities and stateless predicates.
//!
//! # Combinators
//!
//! - [`identity`], [`constant`], [`flip`]
//! - [`then`]: left-to-right composition
//! - [`apply_to`]: `apply_to(x, f) == f(x)`
//! - [`curry2!`](crate::curry2) / [`uncurry2`]
//! - [`not`], [`not2`]: predicate negation
//! - [`if_else`], [`case`], [`switch`]: conditionals as expressions
//!
//! # Predicates and folds
//!
//! [`is_even`], [`is_odd`], [`greater_than`], [`greater_than_or_equal`],
//! [`less_than`], [`less_than_or_equal`], [`between`], and the folding
//! functions [`sum`] and [`count`].
//!
//! # Examples
//!
//! ```rust
//! use seqkit::compose::{is_odd, not, then};
//! use seqkit::eager;
//!
//! let square_then_halve = then(|value: i32| value * value, |value| value / 2);
//! assert_eq!(eager::map(square_then_halve, vec![2, 4]), [2, 8]);
//!
//! let (odd, even) = eager::partition(is_odd, vec![3, 6, 9, 12, 15]);
//! assert_eq!(odd, [3, 9, 15]);
//! assert_eq!(even, [6, 12]);
//! assert_eq!(eager::filter(not(is_odd::<i32>), vec![1, 2, 3, 4]), [2, 4]);
//! ```

mod curry_macro;
mod predicates;
mod utils;

pub use predicates::{
    between, count, greater_than, greater_than_or_equal, is_even, is_odd, less_than,
    less_than_or_equal, sum,
};
pub use utils::{Case, apply_to, case, constant, flip, identity, if_else, not, not2, switch, then, uncurry2};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;

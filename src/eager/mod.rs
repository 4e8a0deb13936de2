//! Eager combinators over finite inputs.
//!
//! Every function here drains its input completely and returns a fully
//! built, read-only result: an [`ImmutableList`], an [`ImmutableMap`] or an
//! [`ImmutableSet`]. Inputs are anything implementing [`IntoIterator`],
//! including the lists returned by other combinators.
//!
//! Arguments that cannot be valid (a zero count, an empty input where an
//! element is required, inputs of differing length) are rejected with a
//! [`FunctionalError`](crate::error::FunctionalError) before any output is
//! produced.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::eager;
//!
//! let squares = eager::map(|n: i32| n * n, 1..=5);
//! let (even, odd) = eager::partition(|n: &i32| n % 2 == 0, squares.clone());
//! assert_eq!(even, [4, 16]);
//! assert_eq!(odd, [1, 9, 25]);
//!
//! let total = eager::fold(|sum, n| sum + n, 0, squares);
//! assert_eq!(total, 55);
//! ```

mod cons;
mod fold;
mod generate;
mod group;
mod list;
mod map;
mod range;
mod search;
mod slice;
mod transform;
mod zip;

pub use cons::{ConsIter, ConsList};
pub use fold::{fold, fold_and_choose};
pub use generate::{constant, init, range, unfold, unfold_option};
pub use group::{group_by, partition, to_dictionary, to_set};
pub use list::{ImmutableList, ImmutableListIntoIter};
pub use map::{ImmutableMap, ImmutableSet, KeyHasher};
pub use range::{partition_ranges, partition_ranges_with};
pub use search::{exists, find, find_index, find_last, for_all, for_all2, last, pick};
pub use slice::{skip, skip_while, take, take_n_and_yield, take_while};
pub use transform::{choose, collect, concat, filter, join, map, mapi, sort_with};
pub use zip::{unzip, unzip3, zip, zip3};

pub use crate::seq::Range;

use crate::seq::Sequence;

/// Drains one traversal of a lazy sequence into a list.
///
/// Never returns for an infinite sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::eager;
/// use seqkit::seq::{self, Sequence};
///
/// let firsts = eager::to_list(&seq::init_unbounded(|index| index * 3).take(3));
/// assert_eq!(firsts, [3, 6, 9]);
/// ```
pub fn to_list<S: Sequence>(sequence: &S) -> ImmutableList<S::Item> {
    list::drain(sequence)
}

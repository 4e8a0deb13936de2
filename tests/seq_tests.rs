//! Integration tests for the lazy sequence adapters.
//!
//! Covers the cursor contract (idempotent `has_next`, exhaustion errors,
//! read-only cursors), restartability of composed pipelines, and the
//! concrete scenarios each adapter is documented with.

#![cfg(feature = "seq")]

use rstest::{fixture, rstest};
use seqkit::error::FunctionalError;
use seqkit::seq::{self, Cursor, Sequence};
use std::cell::Cell;

#[fixture]
fn one_to_ten() -> seq::Of<i32> {
    seq::of((1..=10).collect::<Vec<_>>())
}

// =============================================================================
// Cursor contract
// =============================================================================

#[rstest]
fn test_has_next_does_not_advance_upstream(one_to_ten: seq::Of<i32>) {
    let pulls = Cell::new(0);
    let counted = one_to_ten.map(|value| {
        pulls.set(pulls.get() + 1);
        value
    });
    let odd = counted.filter(|value: &i32| value % 2 == 1);

    let mut cursor = odd.iterate();
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(pulls.get(), 1);

    assert_eq!(cursor.next_element(), Ok(1));
    assert_eq!(pulls.get(), 1);

    assert_eq!(cursor.next_element(), Ok(3));
    assert_eq!(pulls.get(), 3);
}

#[rstest]
fn test_next_without_has_next_yields_every_element(one_to_ten: seq::Of<i32>) {
    let multiples_of_three = one_to_ten.filter(|value: &i32| value % 3 == 0);
    let mut cursor = multiples_of_three.iterate();

    assert_eq!(cursor.next_element(), Ok(3));
    assert_eq!(cursor.next_element(), Ok(6));
    assert_eq!(cursor.next_element(), Ok(9));
    assert_eq!(
        cursor.next_element(),
        Err(FunctionalError::Exhausted { operation: "seq::filter" })
    );
}

#[rstest]
fn test_exhaustion_is_permanent() {
    let single = seq::of(vec![1]);
    let mut cursor = single.iterate();

    assert_eq!(cursor.next_element(), Ok(1));
    for _ in 0..3 {
        assert!(!cursor.has_next());
        assert!(cursor.next_element().is_err());
    }
}

#[rstest]
fn test_remove_is_unsupported_on_appended_sequence(one_to_ten: seq::Of<i32>) {
    let pipeline = seq::append(0, one_to_ten.take(3));
    let mut cursor = pipeline.iterate();

    assert!(matches!(
        cursor.remove(),
        Err(FunctionalError::UnsupportedOperation { operation: "seq::append", .. })
    ));
    assert_eq!(pipeline.to_vec(), vec![0, 1, 2, 3]);
}

// =============================================================================
// Restartability
// =============================================================================

#[rstest]
fn test_composed_pipeline_restarts(one_to_ten: seq::Of<i32>) {
    let pipeline = one_to_ten
        .skip(1)
        .filter(|value: &i32| value % 2 == 0)
        .map(|value| value * value)
        .take(3);

    assert_eq!(pipeline.to_vec(), vec![4, 16, 36]);
    assert_eq!(pipeline.to_vec(), vec![4, 16, 36]);
}

#[rstest]
fn test_two_cursors_are_independent(one_to_ten: seq::Of<i32>) {
    let pipeline = one_to_ten.every_nth(4).unwrap();

    let mut first = pipeline.iterate();
    let mut second = pipeline.iterate();

    assert_eq!(first.next_element(), Ok(1));
    assert_eq!(first.next_element(), Ok(5));
    assert_eq!(second.next_element(), Ok(1));
    assert_eq!(first.next_element(), Ok(9));
    assert_eq!(second.next_element(), Ok(5));
}

#[rstest]
fn test_once_is_not_restartable() {
    let single_pass = seq::once(vec![1, 2, 3].into_iter());

    assert_eq!(single_pass.to_vec(), vec![1, 2, 3]);
    assert!(single_pass.to_vec().is_empty());
}

// =============================================================================
// Adapters
// =============================================================================

#[rstest]
fn test_choose_keeps_only_present_values() {
    let words = seq::of(vec!["4", "x", "15", "", "16"]);
    let numbers = seq::choose(|word: &str| word.parse::<i32>().ok(), words);

    assert_eq!(numbers.to_vec(), vec![4, 15, 16]);
}

#[rstest]
fn test_collect_flattens_in_order() {
    let repeated = seq::collect(|value: usize| vec![value; value], seq::of(vec![1, 2, 3]));

    assert_eq!(repeated.to_vec(), vec![1, 2, 2, 3, 3, 3]);
}

#[rstest]
fn test_collect_skips_empty_inner_sequences() {
    let sparse = seq::collect(
        |value: i32| if value % 2 == 0 { vec![value] } else { Vec::new() },
        seq::of(vec![1, 3, 4, 5, 7, 8]),
    );

    assert_eq!(sparse.to_vec(), vec![4, 8]);
}

#[rstest]
fn test_zip_stops_at_the_shorter_input() {
    let letters = seq::of(vec!['a', 'b', 'c']);
    let numbers = seq::of(vec![1, 2]);

    assert_eq!(seq::zip(letters, numbers).to_vec(), vec![('a', 1), ('b', 2)]);
}

#[rstest]
fn test_zip3() {
    let zipped = seq::zip3(
        seq::of(vec![1, 2, 3]),
        seq::of(vec!["one", "two", "three"]),
        seq::of(vec![true, false, true]),
    );

    assert_eq!(
        zipped.to_vec(),
        vec![(1, "one", true), (2, "two", false), (3, "three", true)]
    );
}

#[rstest]
fn test_zip_fn_pairs_two_projections() {
    let pairs = seq::zip_fn(|value: &i32| value + 1, |value: &i32| value * 10, seq::of(vec![1, 2]));

    assert_eq!(pairs.to_vec(), vec![(2, 10), (3, 20)]);
}

#[rstest]
#[case(0, vec![])]
#[case(3, vec![1, 2, 3])]
#[case(25, (1..=10).collect())]
fn test_take_yields_at_most_count(one_to_ten: seq::Of<i32>, #[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(seq::take(count, one_to_ten).to_vec(), expected);
}

#[rstest]
fn test_take_of_infinite_sequence() {
    let naturals = seq::init_unbounded(|index| index);

    assert_eq!(naturals.take(4).to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_take_while_stops_at_first_failure(one_to_ten: seq::Of<i32>) {
    let small = seq::take_while(|value: &i32| *value < 4, seq::append(2, one_to_ten));

    assert_eq!(small.to_vec(), vec![2, 1, 2, 3]);
}

#[rstest]
#[case(0, (1..=10).collect())]
#[case(7, vec![8, 9, 10])]
#[case(10, vec![])]
#[case(50, vec![])]
fn test_skip_never_fails(one_to_ten: seq::Of<i32>, #[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(seq::skip(count, one_to_ten).to_vec(), expected);
}

#[rstest]
fn test_skip_while_keeps_the_first_failing_element() {
    let tail = seq::skip_while(|value: &i32| *value < 5, seq::of(vec![1, 3, 5, 2, 7]));

    assert_eq!(tail.to_vec(), vec![5, 2, 7]);
}

#[rstest]
fn test_append_yields_head_first() {
    let list = seq::append("head", seq::of(vec!["a", "b"]));

    assert_eq!(list.to_vec(), vec!["head", "a", "b"]);
}

#[rstest]
fn test_append_to_empty_upstream() {
    let list = seq::append(9, seq::of(Vec::<i32>::new()));

    assert_eq!(list.to_vec(), vec![9]);
}

#[rstest]
fn test_concat() {
    let joined = seq::concat(seq::of(vec![1, 2]), seq::of(vec![3]));

    assert_eq!(joined.to_vec(), vec![1, 2, 3]);
}

#[rstest]
#[case(1, (1..=10).collect())]
#[case(2, vec![1, 3, 5, 7, 9])]
#[case(3, vec![1, 4, 7, 10])]
#[case(20, vec![1])]
fn test_every_nth(one_to_ten: seq::Of<i32>, #[case] step: usize, #[case] expected: Vec<i32>) {
    assert_eq!(seq::every_nth(step, one_to_ten).unwrap().to_vec(), expected);
}

#[rstest]
fn test_every_nth_rejects_zero_step(one_to_ten: seq::Of<i32>) {
    assert!(matches!(
        seq::every_nth(0, one_to_ten),
        Err(FunctionalError::InvalidArgument { operation: "seq::every_nth", .. })
    ));
}

#[rstest]
fn test_reverse() {
    assert_eq!(seq::reverse(vec![1, 2, 3]).unwrap().to_vec(), vec![3, 2, 1]);
    assert!(seq::reverse(Vec::<i32>::new()).is_err());
}

#[rstest]
fn test_mapi_is_zero_based() {
    let labelled = seq::mapi(|index, letter: char| format!("{index}{letter}"), seq::of(vec!['a', 'b']));

    assert_eq!(labelled.to_vec(), vec!["0a", "1b"]);
}

// =============================================================================
// Generators
// =============================================================================

#[rstest]
fn test_init_generates_from_one() {
    let evens = seq::init(|index| 2 * index, 5).unwrap();

    assert_eq!(evens.to_vec(), vec![2, 4, 6, 8, 10]);
}

#[rstest]
fn test_init_rejects_zero_count() {
    assert!(matches!(
        seq::init(|index| index, 0),
        Err(FunctionalError::InvalidArgument { operation: "seq::init", .. })
    ));
}

#[rstest]
fn test_unfold_stops_before_stepping_a_stopped_state() {
    let steps = Cell::new(0);
    let doubles = seq::unfold(
        |state: i32| {
            steps.set(steps.get() + 1);
            (state * 2, state + 1)
        },
        |state| *state > 10,
        1,
    );

    assert_eq!(doubles.to_vec(), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    assert_eq!(steps.get(), 10);
}

#[rstest]
fn test_unfold_fibonacci_is_lazy() {
    let fibonacci = seq::unfold_option(|(a, b): (u64, u64)| Some((a, (b, a + b))), (0, 1));

    assert_eq!(fibonacci.take(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
}

#[rstest]
fn test_partition_ranges() {
    let ranges: Vec<(usize, usize)> = seq::partition_ranges(13, 5)
        .unwrap()
        .elements()
        .map(seq::Range::into_bounds)
        .collect();

    assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 9), (9, 11), (11, 13)]);
}

// =============================================================================
// Iterator bridge
// =============================================================================

#[rstest]
fn test_elements_work_with_std_iterators(one_to_ten: seq::Of<i32>) {
    let total: i32 = one_to_ten.filter(|value: &i32| *value > 5).elements().sum();

    assert_eq!(total, 40);
}

#[rstest]
fn test_immutable_list_is_a_sequence() {
    let list = seqkit::eager::ImmutableList::from(vec![3, 1, 2]);
    let doubled = seq::map(|value| value * 2, list.clone());

    assert_eq!(doubled.to_vec(), vec![6, 2, 4]);
    assert_eq!(list, [3, 1, 2]);
}
